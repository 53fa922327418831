/*!
Configuration.

All configuration is contained in a [Config], each part of which is a [ConfigOption] noting the permitted range of the option.

The library reads configuration only when checking [normal forms](crate::normal_form).
The remaining options are read by the CLI.
*/

mod config_option;
pub use config_option::ConfigOption;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Require text to be a well-formed formula before checking for a normal form.
    ///
    /// Canonical forms are often written without outer parentheses, as in `(A & B) | (!A & !B)`, and so this is off by default.
    pub strict_normal_form: ConfigOption<bool>,

    /// The longest input, in bytes, the CLI will examine.
    ///
    /// Checks of normal forms may revisit tokens once per nested group, so this bounds the work done on a single input.
    pub max_input_length: ConfigOption<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            strict_normal_form: ConfigOption {
                name: "strict",
                min: false,
                max: true,
                value: false,
            },

            max_input_length: ConfigOption {
                name: "max_input_length",
                min: 1,
                max: 1 << 16,
                value: 1 << 12,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_respected() {
        let mut config = Config::default();

        assert!(!config.max_input_length.set(0));
        assert_eq!(config.max_input_length.value, 1 << 12);

        assert!(config.max_input_length.set(12));
        assert_eq!(config.max_input_length.value, 12);

        let (min, max) = config.max_input_length.min_max();
        assert!(!config.max_input_length.set(max + 1));
        assert!(config.max_input_length.set(min));
    }

    #[test]
    fn strict_is_off() {
        assert!(!Config::default().strict_normal_form.value);
    }
}
