//! Product configuration trait for CLI binaries
//!
//! The binary implements this trait to name itself and to choose where
//! the generated files land.

use crate::config::ScaffoldLayout;

/// Label shown on the module name prompt
pub const DEFAULT_PROMPT_LABEL: &str = "Enter module name (e.g., Users):";

/// Line printed after every file has been written
pub const DEFAULT_COMPLETION_MESSAGE: &str = "🎉 CRUD module created successfully!";

/// Configuration trait for scaffolding products
///
/// Each product defines:
/// - Product identity (name, display name)
/// - Prompt and completion wording
/// - The directory layout generated files are written into
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Label for the module name prompt
    fn prompt_label(&self) -> &'static str {
        DEFAULT_PROMPT_LABEL
    }

    /// Message shown once the scaffold is complete
    fn completion_message(&self) -> &'static str {
        DEFAULT_COMPLETION_MESSAGE
    }

    /// Where the generated files are written, relative to the working directory
    fn layout(&self) -> ScaffoldLayout {
        ScaffoldLayout::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct TestConfig;

    impl ProductConfig for TestConfig {
        fn name(&self) -> &'static str {
            "test-cli"
        }

        fn display_name(&self) -> &'static str {
            "Test CLI"
        }

        fn cli_description(&self) -> &'static str {
            "Test description"
        }
    }

    #[test]
    fn test_default_prompt_and_completion() {
        let config = TestConfig;
        assert_eq!(config.prompt_label(), "Enter module name (e.g., Users):");
        assert_eq!(
            config.completion_message(),
            "🎉 CRUD module created successfully!"
        );
    }

    #[test]
    fn test_default_layout_is_relative() {
        let layout = TestConfig.layout();
        assert_eq!(layout, ScaffoldLayout::default());
        assert!(layout.root.as_os_str().is_empty());
    }
}
