// src/error.rs

use std::fmt;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserMsgKind {
    Success,
    Warn,
    Error,
}

#[derive(Clone, Debug)]
pub struct UserMsg {
    pub kind: UserMsgKind,
    pub short: &'static str,
    pub detail: Option<String>,
}

#[derive(Debug)]
pub enum AppError {
    // --------------------------------------------------
    // generic / plumbing
    // --------------------------------------------------
    StateLockPoisoned,
    NoRecordLoaded,

    // --------------------------------------------------
    // input resource
    // --------------------------------------------------
    LoadReadFailed(String),
    LoadTooLarge { bytes: u64, max: u64 },
    LoadInvalidJson(String),

    // --------------------------------------------------
    // session gate / controller
    // --------------------------------------------------
    EditingDisabled,
    IncorrectPassword,
    NotAuthenticating,
    NotEditing,

    // --------------------------------------------------
    // export
    // --------------------------------------------------
    ExportSerialize(String),
    ExportWriteFailed(String),
    ExportRenameFailed(String),

    // --------------------------------------------------
    // image fields
    // --------------------------------------------------
    ImageReadFailed(String),
}

impl AppError {
    pub fn user_msg(&self) -> UserMsg {
        use AppError::*;

        let mut kind = UserMsgKind::Error;
        let detail = Some(self.to_string());

        let short: &'static str = match self {
            StateLockPoisoned => "Internal state lock failed.",
            NoRecordLoaded => "No portfolio data is loaded.",

            LoadReadFailed(_) | LoadTooLarge { .. } | LoadInvalidJson(_) => {
                "Failed to load portfolio data."
            }

            EditingDisabled => {
                kind = UserMsgKind::Warn;
                "Editing is disabled for this portfolio."
            }
            IncorrectPassword => "Incorrect password. Please try again.",
            NotAuthenticating => "No password prompt is open.",
            NotEditing => "Edit mode is not active.",

            ExportSerialize(_) => "Could not serialize portfolio. Changes were not saved.",
            ExportWriteFailed(_) | ExportRenameFailed(_) => {
                "Could not write portfolio.json. Changes were not saved."
            }

            ImageReadFailed(_) => "Could not read image file.",
        };

        UserMsg {
            kind,
            short,
            detail,
        }
    }

    /// Errors that leave an open edit session usable.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            AppError::LoadReadFailed(_)
                | AppError::LoadTooLarge { .. }
                | AppError::LoadInvalidJson(_)
                | AppError::StateLockPoisoned
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use AppError::*;

        match self {
            StateLockPoisoned => write!(f, "state lock poisoned"),
            NoRecordLoaded => write!(f, "no record loaded"),

            LoadReadFailed(s) => write!(f, "portfolio read failed: {s}"),
            LoadTooLarge { bytes, max } => write!(f, "portfolio too large: {bytes} > {max}"),
            LoadInvalidJson(s) => write!(f, "portfolio invalid json: {s}"),

            EditingDisabled => write!(f, "editing disabled: no edit password configured"),
            IncorrectPassword => write!(f, "incorrect password"),
            NotAuthenticating => write!(f, "not authenticating"),
            NotEditing => write!(f, "not editing"),

            ExportSerialize(s) => write!(f, "export serialize failed: {s}"),
            ExportWriteFailed(s) => write!(f, "export write failed: {s}"),
            ExportRenameFailed(s) => write!(f, "export rename failed: {s}"),

            ImageReadFailed(s) => write!(f, "image read failed: {s}"),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_password_is_a_warning_not_an_error() {
        let msg = AppError::EditingDisabled.user_msg();
        assert_eq!(msg.kind, UserMsgKind::Warn);
    }

    #[test]
    fn load_failures_share_one_user_message() {
        let a = AppError::LoadReadFailed("nope".into()).user_msg();
        let b = AppError::LoadInvalidJson("eof".into()).user_msg();
        let c = AppError::LoadTooLarge { bytes: 9, max: 1 }.user_msg();
        assert_eq!(a.short, b.short);
        assert_eq!(b.short, c.short);
    }

    #[test]
    fn file_failures_name_the_operation_that_failed() {
        let read = AppError::LoadReadFailed("denied".into()).to_string();
        let write = AppError::ExportWriteFailed("disk full".into()).to_string();
        let image = AppError::ImageReadFailed("missing".into()).to_string();

        assert_eq!(read, "portfolio read failed: denied");
        assert_eq!(write, "export write failed: disk full");
        assert_eq!(image, "image read failed: missing");
        assert_eq!(
            AppError::ImageReadFailed("missing".into()).user_msg().short,
            "Could not read image file."
        );
    }

    #[test]
    fn export_failures_are_recoverable() {
        assert!(AppError::ExportSerialize("x".into()).is_recoverable());
        assert!(AppError::ExportWriteFailed("x".into()).is_recoverable());
        assert!(!AppError::LoadInvalidJson("x".into()).is_recoverable());
    }
}
