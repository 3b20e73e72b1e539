//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use bis_ir::StringInterner;

use super::Interpreter;
use crate::config::RuntimeConfig;
use crate::diagnostics::CallStack;
use crate::linkage::BindingTable;
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Builder for [`Interpreter`].
///
/// Defaults: stdout print handler, unlimited call depth.
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    bindings: &'a BindingTable,
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: Option<usize>,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner, bindings: &'a BindingTable) -> Self {
        Self {
            interner,
            bindings,
            print_handler: None,
            max_call_depth: None,
        }
    }

    /// Set where `print` writes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Apply the limits from a runtime configuration.
    #[must_use]
    pub fn config(mut self, config: &RuntimeConfig) -> Self {
        self.max_call_depth = config.max_call_depth;
        self
    }

    #[must_use]
    pub fn max_call_depth(mut self, depth: Option<usize>) -> Self {
        self.max_call_depth = depth;
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            interner: self.interner,
            bindings: self.bindings,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            call_stack: CallStack::new(self.max_call_depth),
        }
    }
}
