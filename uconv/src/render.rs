//! Result sentences

use std::fmt;

use uconv_core::format_number;

use crate::convert::Conversion;

impl fmt::Display for Conversion {
    /// "{source} {unit} is {target} {unit}", singular only for exactly 1.0
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} is {} {}",
            format_number(self.source_value),
            self.source_unit.display_name(self.source_value),
            format_number(self.target_value),
            self.target_unit.display_name(self.target_value),
        )
    }
}
