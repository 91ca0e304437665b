// Script container and file format tests

#[cfg(test)]
mod tests {
    use crate::kpl_compiler::error::CompilerError;
    use crate::kpl_compiler::script::{
        FieldType, Script, ScriptField, CODES_ARRAY_SIZE, FIELDS_ARRAY_SIZE, INVALID_FIELD_VALUE,
        MAX_CODES, MAX_FIELDS, SCRIPT_SIZE, SCRIPT_VERSION,
    };
    use std::io::Cursor;
    use test_log::test;

    #[test]
    fn test_layout_constants() {
        assert_eq!(CODES_ARRAY_SIZE, 8192);
        assert_eq!(FIELDS_ARRAY_SIZE, 4096);
        assert_eq!(SCRIPT_SIZE, 12552);
        assert_eq!(SCRIPT_VERSION, 12);
    }

    #[test]
    fn test_new_script_is_cleared() {
        let script = Script::new();
        assert_eq!(script.codes().len(), MAX_CODES);
        assert_eq!(script.fields().len(), MAX_FIELDS);
        assert!(script.codes().iter().all(|c| c == 0));
        assert!(script
            .fields()
            .iter()
            .all(|f| f.kind == FieldType::Invalid && f.value == INVALID_FIELD_VALUE));
        assert_eq!(script, Script::default());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut script = Script::new();
        script.set_code(10, 1000).unwrap();
        script.set_field(3, ScriptField::constant(-7)).unwrap();
        script.clear();
        let once = script.clone();
        script.clear();
        assert_eq!(script, once);
        assert_eq!(script, Script::new());
    }

    #[test]
    fn test_out_of_range_access() {
        let mut script = Script::new();
        assert!(matches!(script.code(MAX_CODES), Err(CompilerError::BadIndex(_))));
        assert!(matches!(script.field(MAX_FIELDS), Err(CompilerError::BadIndex(_))));
        assert!(matches!(
            script.set_code(MAX_CODES, 1),
            Err(CompilerError::BadIndex(_))
        ));
        assert!(matches!(
            script.set_field(MAX_FIELDS, ScriptField::user(0)),
            Err(CompilerError::BadIndex(_))
        ));
        assert!(matches!(
            script.codes().get(MAX_CODES),
            Err(CompilerError::BadIndex(_))
        ));
        assert_eq!(script.code(MAX_CODES - 1), Ok(0));
    }

    #[test]
    fn test_field_helpers() {
        let mut field = ScriptField::internal(1048);
        assert!(field.is_internal());
        assert_eq!(field.index(), 1048);
        field.invalidate();
        assert!(field.is_invalid());
        assert_eq!(field.value, INVALID_FIELD_VALUE);
        assert!(ScriptField::user(4).is_user());
        assert!(ScriptField::constant(4).is_constant());
        assert_eq!(FieldType::from_tag(2), FieldType::Internal);
        assert_eq!(FieldType::from_tag(4), FieldType::Unknown(4));
        assert_eq!(FieldType::Unknown(4).tag(), 4);
        assert_eq!(FieldType::Invalid.tag(), 3);
    }

    #[test]
    fn test_set_version() {
        let mut script = Script::new();
        assert!(!script.has_current_version());
        script.set_code(1, 77).unwrap();
        script.set_version();
        assert_eq!(script.code(0), Ok(SCRIPT_VERSION));
        assert_eq!(script.code(1), Ok(0));
        assert!(script.has_current_version());
    }

    #[test]
    fn test_copy_code_data_restamps_version() {
        let mut source = Script::new();
        source.set_code(0, 3).unwrap();
        source.set_code(2, 1000).unwrap();
        source.set_code(MAX_CODES - 1, 42).unwrap();
        source.set_field(0, ScriptField::constant(9)).unwrap();

        let mut target = Script::new();
        target.copy_code_data_from(&source);
        assert_eq!(target.version(), SCRIPT_VERSION);
        assert_eq!(target.code(2), Ok(1000));
        assert_eq!(target.code(MAX_CODES - 1), Ok(42));
        // Only codes are copied
        assert!(target.field(0).unwrap().is_invalid());
        assert_eq!(source.code(0), Ok(3));
    }

    #[test]
    fn test_byte_layout() {
        let mut script = Script::new();
        script.set_version();
        script.set_code(2, 0x0403).unwrap();
        script.set_field(0, ScriptField::user(5)).unwrap();
        script.set_field(1, ScriptField::constant(-1)).unwrap();

        let bytes = script.to_bytes();
        assert_eq!(bytes.len(), SCRIPT_SIZE);
        assert_eq!(&bytes[0..2], &[12, 0]);
        assert_eq!(&bytes[4..6], &[0x03, 0x04]);

        let f0 = CODES_ARRAY_SIZE;
        assert_eq!(&bytes[f0..f0 + 8], &[1, 0, 0, 0, 5, 0, 0, 0]);
        assert_eq!(&bytes[f0 + 8..f0 + 16], &[0, 0, 0, 0, 0xff, 0xff, 0xff, 0xff]);
        // Untouched field keeps the invalid sentinel
        assert_eq!(&bytes[f0 + 16..f0 + 24], &[3, 0, 0, 0, 3, 0, 0, 0]);

        let padding = &bytes[CODES_ARRAY_SIZE + FIELDS_ARRAY_SIZE..];
        assert_eq!(padding.len(), 264);
        assert!(padding.iter().all(|b| *b == 0));
    }

    #[test]
    fn test_write_then_read() {
        let mut script = Script::new();
        script.set_version();
        script.set_code(2, 1000).unwrap();
        script.set_code(3, 1014).unwrap();
        script.set_field(7, ScriptField::internal(1048)).unwrap();

        let mut out = Vec::new();
        script.write(&mut out).unwrap();
        assert_eq!(out.len(), SCRIPT_SIZE);

        let mut loaded = Script::new();
        loaded.set_code(9, 99).unwrap();
        loaded.read(Cursor::new(out)).unwrap();
        assert_eq!(loaded, script);
    }

    #[test]
    fn test_read_truncated_in_codes() {
        let mut script = Script::new();
        script.set_field(0, ScriptField::constant(1)).unwrap();

        // Three codes and a dangling half code
        let bytes = vec![12, 0, 0, 0, 0xe8, 0x03, 0x01];
        script.read(Cursor::new(bytes)).unwrap();
        assert_eq!(script.code(0), Ok(12));
        assert_eq!(script.code(2), Ok(1000));
        assert_eq!(script.code(3), Ok(0));
        assert!(script.fields().iter().all(|f| f.is_invalid()));
    }

    #[test]
    fn test_read_truncated_in_fields() {
        let mut source = Script::new();
        source.set_version();
        source.set_field(0, ScriptField::constant(5)).unwrap();
        source.set_field(1, ScriptField::user(2)).unwrap();

        let mut bytes = source.to_bytes();
        bytes.truncate(CODES_ARRAY_SIZE + 12);

        let mut script = Script::new();
        script.read(Cursor::new(bytes)).unwrap();
        assert_eq!(script.version(), SCRIPT_VERSION);
        assert_eq!(*script.field(0).unwrap(), ScriptField::constant(5));
        assert!(script.field(1).unwrap().is_invalid());
    }

    #[test]
    fn test_read_empty_stream() {
        let mut script = Script::new();
        script.set_code(5, 5).unwrap();
        script.read(Cursor::new(Vec::new())).unwrap();
        assert_eq!(script, Script::new());
    }

    #[test]
    fn test_unknown_field_tag_is_kept() {
        let mut bytes = Script::new().to_bytes();
        let f0 = CODES_ARRAY_SIZE;
        bytes[f0..f0 + 8].copy_from_slice(&[9, 0, 0, 0, 4, 0, 0, 0]);

        let mut script = Script::new();
        script.read(Cursor::new(bytes.clone())).unwrap();
        let field = script.field(0).unwrap();
        assert_eq!(field.kind, FieldType::Unknown(9));
        assert_eq!(field.value, 4);
        assert!(!field.is_invalid());

        // Read then write gives back the same bytes
        let mut out = Vec::new();
        script.write(&mut out).unwrap();
        assert_eq!(out, bytes);
    }

    #[test]
    fn test_intern_field_reuses_and_fills_slots() {
        let mut script = Script::new();
        script.set_field(0, ScriptField::constant(1)).unwrap();

        let mana = ScriptField::internal(1048);
        assert_eq!(script.intern_field(mana), Ok(1));
        assert_eq!(script.intern_field(ScriptField::user(2)), Ok(2));
        assert_eq!(script.intern_field(mana), Ok(1));
        assert_eq!(script.intern_field(ScriptField::constant(1)), Ok(0));
        assert_eq!(*script.field(1).unwrap(), mana);
    }

    #[test]
    fn test_intern_field_when_full() {
        let mut script = Script::new();
        for i in 0..MAX_FIELDS {
            script.set_field(i, ScriptField::constant(i as i32)).unwrap();
        }
        assert_eq!(
            script.intern_field(ScriptField::internal(1048)),
            Err(CompilerError::FullFieldData)
        );
        assert_eq!(script.intern_field(ScriptField::constant(7)), Ok(7));
    }

    #[test]
    fn test_debug_summary() {
        let mut script = Script::new();
        script.set_version();
        script.set_field(0, ScriptField::constant(1)).unwrap();
        let debug = format!("{:?}", script);
        assert!(debug.contains("version: 12"));
        assert!(debug.contains("used_codes: 1"));
        assert!(debug.contains("used_fields: 1"));
    }
}
