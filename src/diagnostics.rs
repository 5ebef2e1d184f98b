use std::fmt::Display;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagType {
    Warning,
    Error,
}

///
/// A single finding, optionally attributed to the document it was found in.
///
#[derive(Clone, Debug)]
pub struct DiagMsg {
    pub diag_type: DiagType,
    pub document: Option<String>,
    pub msg: String,
}

impl Display for DiagMsg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.diag_type {
            DiagType::Error => write!(f, "Error:")?,
            DiagType::Warning => write!(f, "Warning:")?,
        }
        if let Some(document) = &self.document {
            write!(f, " ({document})")?;
        }
        write!(f, " {}", self.msg)
    }
}

///
/// Collector for warnings and errors.
///
/// Passed as `&mut` through loading and classification, so every finding
/// ends up in one place and the caller decides how to report it.
///
#[derive(Default)]
pub struct Diagnostics {
    pub messages: Vec<DiagMsg>,
    pub warnings: usize,
    pub errors: usize,
}

impl Diagnostics {
    pub fn add_error(&mut self, document: Option<&str>, msg: String) {
        self.add_msg(DiagType::Error, document, msg);
    }

    pub fn add_warning(&mut self, document: Option<&str>, msg: String) {
        self.add_msg(DiagType::Warning, document, msg);
    }

    pub fn add_msg(&mut self, dtype: DiagType, document: Option<&str>, msg: String) {
        match dtype {
            DiagType::Error => self.errors += 1,
            DiagType::Warning => self.warnings += 1,
        }
        log::debug!("{dtype:?} recorded: {msg}");
        self.messages.push(DiagMsg {
            diag_type: dtype,
            document: document.map(|d| d.to_owned()),
            msg,
        });
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}
