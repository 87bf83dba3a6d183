use tally::PropertyKind;

use crate::cli::ui;

/// List command: show every property that `count` accepts
pub fn execute() {
    ui::print_header("Available Properties");
    for kind in PropertyKind::ALL {
        ui::print_result(kind.name(), &format!("{} [{}]", kind.description(), kind.element_type()));
    }
}
