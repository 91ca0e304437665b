// Human-readable script listing
//
// One line per code: slot, value, band and token name. Field slots follow,
// decoded by kind.

use std::fmt;

use crate::kpl_compiler::code_space::{self, Band};
use crate::kpl_compiler::config::ListingConfig;
use crate::kpl_compiler::script::{FieldType, Script, ScriptField};

pub struct Listing<'a> {
    script: &'a Script,
    options: &'a ListingConfig,
}

impl<'a> Listing<'a> {
    pub fn new(script: &'a Script, options: &'a ListingConfig) -> Self {
        Listing { script, options }
    }

    fn band_label(band: Band) -> &'static str {
        match band {
            Band::RawInteger => "raw",
            Band::Instruction => "instr",
            Band::Command => "cmd",
            Band::CommandValue => "value",
            Band::Unassigned => "????",
        }
    }

    fn describe_field(field: &ScriptField) -> String {
        match field.kind {
            FieldType::Constant => format!("const    {}", field.value),
            FieldType::User => format!("user     var[{}]", field.value),
            FieldType::Internal => {
                let name = u16::try_from(field.value)
                    .ok()
                    .and_then(code_space::internal_name)
                    .unwrap_or("?");
                format!("internal {} ({})", field.value, name)
            }
            FieldType::Invalid => format!("invalid  {}", field.value),
            FieldType::Unknown(tag) => format!("tag {:<4} {}", tag, field.value),
        }
    }
}

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Script version: {}", self.script.version())?;
        writeln!(f, "=== CODES ===")?;

        // Slots 0 and 1 hold the version stamp
        for (index, code) in self.script.codes().iter().enumerate().skip(2) {
            if code == 0 && !self.options.show_zero_codes {
                continue;
            }
            let band = code_space::classify(code);
            let name = code_space::code_name(code).unwrap_or("");
            writeln!(
                f,
                "{:04}: {:5}  {:<5} {}",
                index,
                code,
                Listing::band_label(band),
                name
            )?;
        }

        writeln!(f, "=== FIELDS ===")?;
        for (index, field) in self.script.fields().iter().enumerate() {
            if field.is_invalid() && !self.options.show_empty_fields {
                continue;
            }
            writeln!(f, "{:03}: {}", index, Listing::describe_field(field))?;
        }
        Ok(())
    }
}

pub fn render(script: &Script, options: &ListingConfig) -> String {
    Listing::new(script, options).to_string()
}
