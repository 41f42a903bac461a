use thiserror::Error;

/// Fractional digits kept on every coordinate.
pub const COORD_DIGITS: usize = 5;

/// Geometry tags and how deep their coordinates sit inside parentheses.
const SUPPORTED_KINDS: [(&str, usize); 2] = [("MULTILINESTRING", 2), ("LINESTRING", 1)];

#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("missing geometry header")]
    MissingHeader,
    #[error("unsupported geometry type {0:?}")]
    UnsupportedKind(String),
    #[error("geometry has no coordinates")]
    Empty,
    #[error("expected two values per point, got {0:?}")]
    BadPair(String),
    #[error("not a number: {0:?}")]
    BadNumber(String),
    #[error("unbalanced or misplaced parentheses")]
    Unbalanced,
}

/// Rounds to `digits` fractional digits on the decimal representation, so
/// `0.125` style half-way values round the same way they print.
pub fn round_to(value: f64, digits: usize) -> f64 {
    format!("{value:.digits$}").parse().unwrap_or(value)
}

fn check_nesting(body: &str, point_depth: usize) -> Result<(), GeometryError> {
    let mut depth = 0usize;
    for c in body.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.checked_sub(1).ok_or(GeometryError::Unbalanced)?,
            ',' if depth == 0 => return Err(GeometryError::Unbalanced),
            c if c.is_whitespace() || c == ',' => {}
            _ if depth != point_depth => return Err(GeometryError::Unbalanced),
            _ => {}
        }
    }
    if depth != 0 {
        return Err(GeometryError::Unbalanced);
    }
    Ok(())
}

fn parse_number(token: &str) -> Result<f64, GeometryError> {
    token
        .parse::<f64>()
        .map_err(|_| GeometryError::BadNumber(token.to_string()))
}

/// Parses WKT line text such as
/// `MULTILINESTRING ((-87.66068257500989 41.88418745060361, -87.66107301637707 41.88418175252413))`
/// into `(lon, lat)` pairs rounded to [`COORD_DIGITS`]. Multi-part bodies are
/// flattened in order.
pub fn extract_coord_pairs(text: &str) -> Result<Vec<(f64, f64)>, GeometryError> {
    let text = text.trim();
    let open = text.find('(').ok_or(GeometryError::MissingHeader)?;
    let kind = text[..open].trim();
    if kind.is_empty() {
        return Err(GeometryError::MissingHeader);
    }
    let point_depth = SUPPORTED_KINDS
        .iter()
        .find(|(supported, _)| kind.eq_ignore_ascii_case(supported))
        .map(|(_, depth)| *depth)
        .ok_or_else(|| GeometryError::UnsupportedKind(kind.to_string()))?;
    check_nesting(&text[open..], point_depth)?;

    let body: String = text[open..]
        .chars()
        .filter(|c| *c != '(' && *c != ')')
        .collect();

    let mut coords = Vec::new();
    for point in body.split(',') {
        let point = point.trim();
        if point.is_empty() {
            if body.trim().is_empty() {
                break;
            }
            return Err(GeometryError::BadPair(point.to_string()));
        }
        let parts: Vec<&str> = point.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(GeometryError::BadPair(point.to_string()));
        }
        let x = parse_number(parts[0])?;
        let y = parse_number(parts[1])?;
        coords.push((round_to(x, COORD_DIGITS), round_to(y, COORD_DIGITS)));
    }

    if coords.is_empty() {
        return Err(GeometryError::Empty);
    }
    Ok(coords)
}
