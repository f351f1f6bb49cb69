use serde_json::Value;
use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use yamlconv::config::Config;
use yamlconv::converters::ConverterRegistry;
use yamlconv::handlers::convert_handler_document;
use yamlconv::rules::LegacyRules;

type AnyError = Box<dyn std::error::Error + Send + Sync + 'static>;

fn read_input(path: &Path) -> io::Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
    }
}

pub fn handlers(input: &Path) -> Result<(), AnyError> {
    let document: Value = serde_yaml::from_str(&read_input(input)?)?;
    let converted = convert_handler_document(&document)?;

    info!(count = converted.len(), input = %input.display(), "Converted URL handlers");
    println!("{}", serde_json::to_string_pretty(&converted)?);
    Ok(())
}

pub fn value(config: &Config, converter: &str, raw: &str) -> Result<(), AnyError> {
    let rules: Arc<dyn LegacyRules> = Arc::new(config.legacy_rules()?);
    let registry = ConverterRegistry::with_rules(rules);

    let converter = registry.resolve(converter)?;
    let input: Value = serde_yaml::from_str(raw)?;
    let output = converter.convert(&input)?;

    println!("{}", serde_json::to_string(&output)?);
    Ok(())
}
