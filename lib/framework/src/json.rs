use std::fs::read_to_string;
use std::path::Path;

use serde::de::Deserialize;
use serde::de::DeserializeOwned;

use crate::exception::CoreRsResult;
use crate::exception::error_code;

pub fn load_file<T>(path: &Path) -> CoreRsResult<T>
where
    T: DeserializeOwned,
{
    let json = read_to_string(path).map_err(|err| {
        exception!(
            code = error_code::CONFIG_ERROR,
            message = format!("failed to read file, path={}", path.to_string_lossy()),
            source = err
        )
    })?;
    serde_json::from_str(&json).map_err(|err| {
        exception!(
            code = error_code::CONFIG_ERROR,
            message = format!("failed to deserialize, path={}", path.to_string_lossy()),
            source = err
        )
    })
}

pub fn from_json<'a, T>(json: &'a str) -> CoreRsResult<T>
where
    T: Deserialize<'a>,
{
    serde_json::from_str(json)
        .map_err(|err| exception!(message = format!("failed to deserialize, json={json}"), source = err))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use serde::Deserialize;

    use crate::exception::error_code;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        name: String,
    }

    #[test]
    fn from_json() {
        let sample: Sample = super::from_json(r#"{"name":"calvinfo"}"#).unwrap();
        assert_eq!(sample.name, "calvinfo");

        let result: Result<Sample, _> = super::from_json("{");
        assert!(result.is_err());
    }

    #[test]
    fn load_missing_file() {
        let result: Result<Sample, _> = super::load_file(Path::new("/not-exist/conf.json"));
        let error = result.unwrap_err();
        assert_eq!(error.code.as_deref(), Some(error_code::CONFIG_ERROR));
    }
}
