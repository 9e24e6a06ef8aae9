use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedParseError {
    #[error("no seeds given")]
    Empty,
    #[error("seed {0:?} is not a number")]
    Invalid(String),
}

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Parse a comma-separated seed list. Seeds may be decimal or `0x` hex.
pub fn parse_seeds(raw: &str) -> Result<Vec<u64>, SeedParseError> {
    let seeds = split_csv(raw)
        .into_iter()
        .map(|token| {
            let parsed = match token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
                Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16),
                None => token.replace('_', "").parse(),
            };
            parsed.map_err(|_| SeedParseError::Invalid(token))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if seeds.is_empty() {
        return Err(SeedParseError::Empty);
    }
    Ok(seeds)
}
