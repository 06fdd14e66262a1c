use crate::config::ConverterConfig;
use crate::converter::ContentConverter;
use crate::errors::Result;
use crate::llm::LlmProvider;
use crate::platforms::factory::create_platform;

/// Build a converter for the platform called `platform_type`.
///
/// The platform receives `config.platform`; an unknown platform name is a
/// configuration error.
pub fn create_converter(
    platform_type: &str,
    llm: Option<Box<dyn LlmProvider>>,
    config: ConverterConfig,
) -> Result<ContentConverter> {
    let platform = create_platform(platform_type, config.platform.clone())?;
    Ok(ContentConverter::new(platform, llm, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ConvertError;

    #[test]
    fn test_create_converter() {
        let converter = create_converter("Note", None, ConverterConfig::default()).unwrap();
        assert_eq!(converter.platform().name(), "note");
        assert_eq!(converter.config().summary_length, 100);
    }

    #[test]
    fn test_create_converter_unknown_platform() {
        let err = create_converter("wordpress", None, ConverterConfig::default())
            .err()
            .unwrap();
        assert!(matches!(err, ConvertError::Configuration(_)));
        assert!(err.to_string().contains("wordpress"));
    }
}
