use venv::VenvError;

use crate::ui::output::{MessageKind, Printer};

pub fn format_error(err: &anyhow::Error, printer: &Printer) -> String {
    // VenvError already carries its cause in the message
    let message = match err.downcast_ref::<VenvError>() {
        Some(venv_err) => venv_err.to_string(),
        None => format!("{:#}", err),
    };

    printer.format(MessageKind::Error, &message)
}

pub fn print_error(err: &anyhow::Error, printer: &Printer) {
    eprintln!("{}", format_error(err, printer));
}
