use crate::error::{MungeError, Result};
use crate::record::normalize_string;

/// Which street of a pair is listed first: north-south streets before
/// west-east ones.
pub const CARDINAL_ORDER: [char; 4] = ['N', 'S', 'W', 'E'];

pub fn cardinal_rank(name: &str) -> Result<usize> {
    name.chars()
        .next()
        .and_then(|first| CARDINAL_ORDER.iter().position(|dir| *dir == first))
        .ok_or_else(|| MungeError::UnknownDirection {
            name: name.to_string(),
        })
}

pub fn sort_key(name: &str) -> Result<(usize, &str)> {
    Ok((cardinal_rank(name)?, name))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreetPair {
    pub street_1: String,
    pub street_2: String,
    pub pair_key: String,
}

/// Orders the two names of an intersection so that `A & B` and `B & A` come
/// out identical.
pub fn canonical_pair(mainstreet: &str, xstreet: &str) -> Result<StreetPair> {
    let (first, second) = if sort_key(xstreet)? < sort_key(mainstreet)? {
        (xstreet, mainstreet)
    } else {
        (mainstreet, xstreet)
    };
    Ok(StreetPair {
        street_1: first.to_string(),
        street_2: second.to_string(),
        pair_key: normalize_string(&format!("{first} & {second}")),
    })
}
