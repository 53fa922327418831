/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, at `trace` level for individual tokens and productions and at `debug` level for outcomes.

Note, no log implementation is provided by the library.
The CLI installs one when built with the `log` feature.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [lexer](crate::lexer)
    pub const LEXER: &str = "lexer";

    /// Logs related to the [recognizer](crate::recognizer)
    pub const RECOGNIZER: &str = "recognizer";

    /// Logs related to [normal forms](crate::normal_form)
    pub const NORMAL_FORM: &str = "normal_form";
}
