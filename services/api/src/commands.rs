use clap::Args;
use rekro::config::AppConfig;
use rekro::error::AppError;
use rekro::pricing::{PricingContext, PricingEngine, PricingResult};
use rekro::profile::{score_profile, CompletionRequest, ProfileCompletion};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct InputArgs {
    /// Path to the JSON payload
    #[arg(long)]
    pub(crate) input: PathBuf,
}

pub(crate) fn run_quote(args: InputArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = PricingEngine::new(config.pricing);
    let context: PricingContext = read_json(&args.input)?;
    print_json(&quote(&engine, &context))
}

pub(crate) fn run_profile(args: InputArgs) -> Result<(), AppError> {
    let request: CompletionRequest = read_json(&args.input)?;
    print_json(&score(&request))
}

pub(crate) fn quote(engine: &PricingEngine, context: &PricingContext) -> PricingResult {
    engine.quote(context)
}

pub(crate) fn score(request: &CompletionRequest) -> ProfileCompletion {
    score_profile(request.user.as_ref(), &request.draft, &request.documents)
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rekro::profile::Badge;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("rekro-{}-{}", std::process::id(), name));
        let mut file = fs::File::create(&path).expect("temp file created");
        file.write_all(contents.as_bytes()).expect("temp file written");
        path
    }

    #[test]
    fn quote_reads_a_context_file() {
        let path = write_temp(
            "quote.json",
            r#"{
                "property": {
                    "bedroom_count": 3,
                    "furnished": false,
                    "base_weekly_rent": 625.0,
                    "amenities": [],
                    "rooms": []
                },
                "unit": { "kind": "entire_home" },
                "inclusions": { "furniture": { "selected": true } }
            }"#,
        );

        let context: PricingContext = read_json(&path).expect("context parses");
        let result = quote(&PricingEngine::default(), &context);
        fs::remove_file(&path).ok();

        assert_eq!(result.adjusted_base_rent.to_string(), "700.00");
        assert_eq!(result.total_weekly_rent.to_string(), "738.49");
    }

    #[test]
    fn profile_reads_a_completion_request() {
        let path = write_temp(
            "profile.json",
            r#"{
                "user": {
                    "image": "avatar.png",
                    "personal": { "full_name": "Sam Lee", "phone": "0400 000 000" }
                }
            }"#,
        );

        let request: CompletionRequest = read_json(&path).expect("request parses");
        let completion = score(&request);
        fs::remove_file(&path).ok();

        assert!(completion.has_badge(Badge::RekroTrusted));
        assert!(!completion.is_complete);
    }

    #[test]
    fn malformed_payload_is_an_input_error() {
        let path = write_temp("broken.json", "{ not json");
        let err = read_json::<PricingContext>(&path).expect_err("payload is malformed");
        fs::remove_file(&path).ok();
        assert!(matches!(err, AppError::Input(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_json::<PricingContext>(Path::new("/nonexistent/rekro/context.json"))
            .expect_err("file is missing");
        assert!(matches!(err, AppError::Io(_)));
    }
}
