// Compiled script container
//
// A script is a fixed-size record: the code array, the field array and an
// unused trailer. On disk every value is little-endian:
//
//   [0, 8192)        4096 x u16 codes (slot 0 = version, slot 1 = reserved)
//   [8192, 12288)    512 x { u32 kind, i32 value } fields
//   [12288, 12552)   264 bytes padding, written as zeros

use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::kpl_compiler::code_space::ScriptCode;
use crate::kpl_compiler::error::CompilerError;

pub const SCRIPT_VERSION: ScriptCode = 12;
pub const MAX_CODES: usize = 4096;
pub const MAX_FIELDS: usize = 512;
pub const MAX_VARS: usize = 64;

pub const CODE_SIZE: usize = 2;
pub const FIELD_SIZE: usize = 8;
pub const CODES_ARRAY_SIZE: usize = MAX_CODES * CODE_SIZE;
pub const FIELDS_ARRAY_SIZE: usize = MAX_FIELDS * FIELD_SIZE;
pub const EMPTY_DATA_ARRAY_SIZE: usize = 264;
pub const SCRIPT_SIZE: usize = CODES_ARRAY_SIZE + FIELDS_ARRAY_SIZE + EMPTY_DATA_ARRAY_SIZE;

/// Value stamped into the invalid sentinel field
pub const INVALID_FIELD_VALUE: i32 = 3;

/// Kind tag of a field. Tags this format does not define are kept as
/// `Unknown` so a script read from disk writes back byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Constant,
    User,
    Internal,
    Invalid,
    Unknown(u32),
}

impl FieldType {
    pub fn from_tag(tag: u32) -> FieldType {
        match tag {
            0 => FieldType::Constant,
            1 => FieldType::User,
            2 => FieldType::Internal,
            3 => FieldType::Invalid,
            other => FieldType::Unknown(other),
        }
    }

    pub fn tag(self) -> u32 {
        match self {
            FieldType::Constant => 0,
            FieldType::User => 1,
            FieldType::Internal => 2,
            FieldType::Invalid => 3,
            FieldType::Unknown(tag) => tag,
        }
    }
}

/// One field slot. For `User` fields the value is a variable index, for
/// `Internal` fields it is an internal code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptField {
    pub kind: FieldType,
    pub value: i32,
}

impl ScriptField {
    pub const fn invalid() -> Self {
        ScriptField {
            kind: FieldType::Invalid,
            value: INVALID_FIELD_VALUE,
        }
    }

    pub const fn constant(value: i32) -> Self {
        ScriptField {
            kind: FieldType::Constant,
            value,
        }
    }

    pub const fn user(index: i32) -> Self {
        ScriptField {
            kind: FieldType::User,
            value: index,
        }
    }

    pub const fn internal(code: ScriptCode) -> Self {
        ScriptField {
            kind: FieldType::Internal,
            value: code as i32,
        }
    }

    pub fn invalidate(&mut self) {
        *self = ScriptField::invalid();
    }

    pub fn index(&self) -> i32 {
        self.value
    }

    pub fn is_invalid(&self) -> bool {
        self.kind == FieldType::Invalid
    }

    pub fn is_constant(&self) -> bool {
        self.kind == FieldType::Constant
    }

    pub fn is_user(&self) -> bool {
        self.kind == FieldType::User
    }

    pub fn is_internal(&self) -> bool {
        self.kind == FieldType::Internal
    }

    fn to_bytes(self) -> [u8; FIELD_SIZE] {
        let mut bytes = [0u8; FIELD_SIZE];
        bytes[..4].copy_from_slice(&self.kind.tag().to_le_bytes());
        bytes[4..].copy_from_slice(&self.value.to_le_bytes());
        bytes
    }

    fn from_bytes(bytes: &[u8]) -> ScriptField {
        let tag = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let value = i32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        let kind = FieldType::from_tag(tag);
        if let FieldType::Unknown(tag) = kind {
            log::warn!("Unknown field kind tag {} - keeping it as is", tag);
        }
        ScriptField { kind, value }
    }
}

impl Default for ScriptField {
    fn default() -> Self {
        ScriptField::invalid()
    }
}

fn bad_code_index(index: usize) -> CompilerError {
    CompilerError::BadIndex(format!(
        "code index {} outside script codes [0, {})",
        index, MAX_CODES
    ))
}

fn bad_field_index(index: usize) -> CompilerError {
    CompilerError::BadIndex(format!(
        "field index {} outside script fields [0, {})",
        index, MAX_FIELDS
    ))
}

/// Read-only, bounds-checked view over the code array
#[derive(Clone, Copy)]
pub struct CodeView<'a> {
    data: &'a [ScriptCode],
}

impl<'a> CodeView<'a> {
    pub fn get(&self, index: usize) -> Result<ScriptCode, CompilerError> {
        self.data.get(index).copied().ok_or_else(|| bad_code_index(index))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &'a [ScriptCode] {
        self.data
    }

    pub fn iter(&self) -> impl Iterator<Item = ScriptCode> + 'a {
        self.data.iter().copied()
    }
}

/// Read-only, bounds-checked view over the field array
#[derive(Clone, Copy)]
pub struct FieldView<'a> {
    data: &'a [ScriptField],
}

impl<'a> FieldView<'a> {
    pub fn get(&self, index: usize) -> Result<&'a ScriptField, CompilerError> {
        self.data.get(index).ok_or_else(|| bad_field_index(index))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &'a [ScriptField] {
        self.data
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a ScriptField> + 'a {
        self.data.iter()
    }
}

/// The compiled artifact consumed by the engine's interpreter
#[derive(Clone, PartialEq)]
pub struct Script {
    code_data: Box<[ScriptCode]>,
    field_data: Box<[ScriptField]>,
}

impl Default for Script {
    fn default() -> Self {
        Self::new()
    }
}

impl Script {
    /// A script in its cleared state
    pub fn new() -> Self {
        Script {
            code_data: vec![0; MAX_CODES].into_boxed_slice(),
            field_data: vec![ScriptField::invalid(); MAX_FIELDS].into_boxed_slice(),
        }
    }

    pub fn code(&self, index: usize) -> Result<ScriptCode, CompilerError> {
        self.code_data
            .get(index)
            .copied()
            .ok_or_else(|| bad_code_index(index))
    }

    pub fn code_mut(&mut self, index: usize) -> Result<&mut ScriptCode, CompilerError> {
        self.code_data
            .get_mut(index)
            .ok_or_else(|| bad_code_index(index))
    }

    pub fn set_code(&mut self, index: usize, code: ScriptCode) -> Result<(), CompilerError> {
        *self.code_mut(index)? = code;
        Ok(())
    }

    pub fn codes(&self) -> CodeView<'_> {
        CodeView {
            data: &self.code_data,
        }
    }

    pub fn field(&self, index: usize) -> Result<&ScriptField, CompilerError> {
        self.field_data
            .get(index)
            .ok_or_else(|| bad_field_index(index))
    }

    pub fn field_mut(&mut self, index: usize) -> Result<&mut ScriptField, CompilerError> {
        self.field_data
            .get_mut(index)
            .ok_or_else(|| bad_field_index(index))
    }

    pub fn set_field(&mut self, index: usize, field: ScriptField) -> Result<(), CompilerError> {
        *self.field_mut(index)? = field;
        Ok(())
    }

    pub fn fields(&self) -> FieldView<'_> {
        FieldView {
            data: &self.field_data,
        }
    }

    /// Slot holding `field`, storing it in the first invalid slot if no slot
    /// holds it yet. Fails with `FullFieldData` when every slot is taken.
    pub fn intern_field(&mut self, field: ScriptField) -> Result<usize, CompilerError> {
        if let Some(index) = self.field_data.iter().position(|f| *f == field) {
            return Ok(index);
        }
        let index = self
            .field_data
            .iter()
            .position(|f| f.is_invalid())
            .ok_or_else(|| {
                log::warn!("Field data full: {} fields in use", MAX_FIELDS);
                CompilerError::FullFieldData
            })?;
        self.field_data[index] = field;
        log::trace!("Stored field {:?} in slot {}", field, index);
        Ok(index)
    }

    /// Stamp slot 0 with the format version and zero the reserved slot 1
    pub fn set_version(&mut self) {
        self.code_data[0] = SCRIPT_VERSION;
        self.code_data[1] = 0;
    }

    pub fn version(&self) -> ScriptCode {
        self.code_data[0]
    }

    pub fn has_current_version(&self) -> bool {
        self.version() == SCRIPT_VERSION
    }

    /// Copy every code from `other`, then re-stamp this format's version.
    pub fn copy_code_data_from(&mut self, other: &Script) {
        self.code_data.copy_from_slice(&other.code_data);
        self.set_version();
    }

    /// Zero every code and invalidate every field
    pub fn clear(&mut self) {
        self.code_data.fill(0);
        self.field_data.fill(ScriptField::invalid());
    }

    /// Read a script record. The script is cleared first; a truncated stream
    /// leaves every slot it did not fully cover at its cleared default.
    pub fn read<R: Read>(&mut self, mut input: R) -> Result<(), CompilerError> {
        self.clear();

        let mut codes = Vec::with_capacity(CODES_ARRAY_SIZE);
        input
            .by_ref()
            .take(CODES_ARRAY_SIZE as u64)
            .read_to_end(&mut codes)?;
        for (slot, bytes) in self.code_data.iter_mut().zip(codes.chunks_exact(CODE_SIZE)) {
            *slot = ScriptCode::from_le_bytes([bytes[0], bytes[1]]);
        }
        if codes.len() < CODES_ARRAY_SIZE {
            log::warn!(
                "Script truncated in code data: {} of {} bytes",
                codes.len(),
                CODES_ARRAY_SIZE
            );
            return Ok(());
        }

        let mut fields = Vec::with_capacity(FIELDS_ARRAY_SIZE);
        input
            .by_ref()
            .take(FIELDS_ARRAY_SIZE as u64)
            .read_to_end(&mut fields)?;
        for (slot, bytes) in self
            .field_data
            .iter_mut()
            .zip(fields.chunks_exact(FIELD_SIZE))
        {
            *slot = ScriptField::from_bytes(bytes);
        }
        if fields.len() < FIELDS_ARRAY_SIZE {
            log::warn!(
                "Script truncated in field data: {} of {} bytes",
                fields.len(),
                FIELDS_ARRAY_SIZE
            );
        }

        log::debug!(
            "Read script: {} code bytes, {} field bytes, version {}",
            codes.len(),
            fields.len(),
            self.version()
        );
        Ok(())
    }

    /// Write the whole fixed-size record in one pass
    pub fn write<W: Write>(&self, mut output: W) -> Result<(), CompilerError> {
        output.write_all(&self.to_bytes())?;
        Ok(())
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(SCRIPT_SIZE);
        for code in self.code_data.iter() {
            bytes.extend_from_slice(&code.to_le_bytes());
        }
        for field in self.field_data.iter() {
            bytes.extend_from_slice(&field.to_bytes());
        }
        bytes.resize(SCRIPT_SIZE, 0);
        bytes
    }

    pub fn read_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), CompilerError> {
        let path = path.as_ref();
        log::debug!("Reading script from {}", path.display());
        let file = File::open(path).map_err(|e| {
            CompilerError::IOError(format!("Failed to open '{}': {}", path.display(), e))
        })?;
        self.read(BufReader::new(file))
    }

    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CompilerError> {
        let path = path.as_ref();
        log::debug!("Writing script to {} ({} bytes)", path.display(), SCRIPT_SIZE);
        let file = File::create(path).map_err(|e| {
            CompilerError::IOError(format!("Failed to create '{}': {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        self.write(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let used_codes = self.code_data.iter().filter(|c| **c != 0).count();
        let used_fields = self.field_data.iter().filter(|f| !f.is_invalid()).count();
        f.debug_struct("Script")
            .field("version", &self.version())
            .field("used_codes", &used_codes)
            .field("used_fields", &used_fields)
            .finish()
    }
}

#[cfg(test)]
#[path = "script_tests.rs"]
mod tests;
