// Callables: built-in getters and commands a script can invoke
//
// The registry owns every callable. AST nodes refer to them by `CallableId`,
// which is the registration index and never changes once handed out.

use indexmap::IndexMap;

use crate::kpl_compiler::code_builder::CodeBuilder;
use crate::kpl_compiler::code_space::{attribute, command, read_only, ScriptCode};
use crate::kpl_compiler::datatypes::DataType;
use crate::kpl_compiler::error::CompilerError;
use crate::kpl_compiler::script::{Script, ScriptField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CallableId(pub u16);

/// What a call lowers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallableKind {
    /// Reads an internal value through a field reference
    Getter(ScriptCode),
    /// Issues a command token
    Command(ScriptCode),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Callable {
    id: CallableId,
    name: String,
    parameters: Vec<(String, DataType)>,
    returns_value: bool,
    kind: CallableKind,
}

impl Callable {
    pub fn id(&self) -> CallableId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[(String, DataType)] {
        &self.parameters
    }

    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }

    pub fn returns_value(&self) -> bool {
        self.returns_value
    }

    pub fn kind(&self) -> CallableKind {
        self.kind
    }

    /// Emit the code this callable lowers to. A getter's internal value lives
    /// in the field namespace, so it is stored as an internal field of
    /// `script` and the code stream gets that field's slot index.
    pub fn build(
        &self,
        builder: &mut CodeBuilder,
        script: &mut Script,
    ) -> Result<(), CompilerError> {
        match self.kind {
            CallableKind::Getter(code) => {
                let slot = script.intern_field(ScriptField::internal(code))?;
                builder.push_back(slot as ScriptCode)?;
            }
            CallableKind::Command(code) => {
                builder.push_back(code)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct CallableRegistry {
    callables: IndexMap<String, Callable>,
}

impl CallableRegistry {
    pub fn new() -> Self {
        CallableRegistry {
            callables: IndexMap::new(),
        }
    }

    /// A getter for every internal value and a command callable for every command token
    pub fn with_builtins() -> Self {
        let mut registry = CallableRegistry::new();
        for &(name, code) in read_only::ALL.iter().chain(attribute::ALL.iter()) {
            registry.register_getter(name, code);
        }
        for &(name, code) in command::ALL {
            registry.register(name, Vec::new(), false, CallableKind::Command(code));
        }
        log::debug!("Registered {} built-in callables", registry.len());
        registry
    }

    /// Register a callable. Re-registering a name replaces the callable but
    /// keeps its id.
    pub fn register(
        &mut self,
        name: &str,
        parameters: Vec<(String, DataType)>,
        returns_value: bool,
        kind: CallableKind,
    ) -> CallableId {
        let id = match self.callables.get_index_of(name) {
            Some(index) => CallableId(index as u16),
            None => CallableId(self.callables.len() as u16),
        };
        self.callables.insert(
            name.to_string(),
            Callable {
                id,
                name: name.to_string(),
                parameters,
                returns_value,
                kind,
            },
        );
        id
    }

    pub fn register_getter(&mut self, name: &str, code: ScriptCode) -> CallableId {
        self.register(name, Vec::new(), true, CallableKind::Getter(code))
    }

    pub fn has(&self, name: &str) -> bool {
        self.callables.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Result<&Callable, CompilerError> {
        self.callables
            .get(name)
            .ok_or_else(|| CompilerError::UnknownCallable(name.to_string()))
    }

    pub fn get_by_id(&self, id: CallableId) -> Option<&Callable> {
        self.callables
            .get_index(id.0 as usize)
            .map(|(_, callable)| callable)
    }

    pub fn len(&self) -> usize {
        self.callables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Callable> {
        self.callables.values()
    }
}

#[cfg(test)]
#[path = "functions_tests.rs"]
mod tests;
