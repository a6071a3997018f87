use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::AppError;
use crate::models::{DataSource, Envelope, ErrorBody, Meta};

const ENVELOPE_VERSION: &str = "1.0.0";

pub fn print_success<T: Serialize>(
    format: OutputFormat,
    data: T,
    source: DataSource,
    human: impl FnOnce(&T),
) {
    match format {
        OutputFormat::Human => human(&data),
        OutputFormat::Json => {
            let envelope = Envelope {
                ok: true,
                data: Some(data),
                meta: Meta {
                    version: ENVELOPE_VERSION,
                    source,
                },
                error: None,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&envelope).unwrap_or_else(|_| "{}".to_string())
            );
        }
    }
}

pub fn print_error(format: OutputFormat, error: AppError) {
    match format {
        OutputFormat::Human => {
            eprintln!("Error [{}]: {}", error.code(), error);
        }
        OutputFormat::Json => {
            eprintln!(
                "{}",
                serde_json::to_string_pretty(&error_envelope(&error))
                    .unwrap_or_else(|_| "{}".to_string())
            );
        }
    }
}

fn error_envelope(error: &AppError) -> Envelope<serde_json::Value> {
    Envelope {
        ok: false,
        data: None,
        meta: Meta {
            version: ENVELOPE_VERSION,
            source: DataSource::Internal,
        },
        error: Some(ErrorBody {
            code: error.code(),
            message: error.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_shape() {
        let envelope = error_envelope(&AppError::NotFound("game 9 not in catalog".to_string()));
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["ok"], false);
        assert!(json["data"].is_null());
        assert_eq!(json["meta"]["source"], "internal");
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert_eq!(json["error"]["message"], "not found: game 9 not in catalog");
    }
}
