// Linked code builder
//
// Codes are emitted into a doubly linked list stored in an arena of slots.
// A `Location` names one slot and stays valid while codes are inserted
// anywhere else, so codegen can reserve a placeholder early and splice or
// patch around it once a jump target is known. Nothing is ever unlinked.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::kpl_compiler::code_space::ScriptCode;
use crate::kpl_compiler::error::CompilerError;
use crate::kpl_compiler::script::{Script, MAX_CODES};

static NEXT_BUILDER_ID: AtomicU32 = AtomicU32::new(1);

/// Handle to one emitted code. Only valid against the builder that produced
/// it, and only until that builder is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    builder: u32,
    generation: u32,
    slot: usize,
}

#[derive(Debug, Clone)]
struct CodeNode {
    code: ScriptCode,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Debug)]
pub struct CodeBuilder {
    id: u32,
    generation: u32,
    nodes: Vec<CodeNode>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeBuilder {
    pub fn new() -> Self {
        CodeBuilder {
            id: NEXT_BUILDER_ID.fetch_add(1, Ordering::Relaxed),
            generation: 0,
            nodes: Vec::new(),
            head: None,
            tail: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn location(&self, slot: usize) -> Location {
        Location {
            builder: self.id,
            generation: self.generation,
            slot,
        }
    }

    fn ensure_capacity(&self) -> Result<(), CompilerError> {
        if self.nodes.len() >= MAX_CODES {
            log::warn!(
                "Code builder full: {} codes already emitted (max {})",
                self.nodes.len(),
                MAX_CODES
            );
            return Err(CompilerError::FullCodeData);
        }
        Ok(())
    }

    fn resolve(&self, location: Location) -> Result<usize, CompilerError> {
        if location.builder != self.id {
            return Err(CompilerError::BadIndex(format!(
                "location from code builder {} used with code builder {}",
                location.builder, self.id
            )));
        }
        if location.generation != self.generation || location.slot >= self.nodes.len() {
            return Err(CompilerError::BadIndex(format!(
                "stale location {} (builder was cleared)",
                location.slot
            )));
        }
        Ok(location.slot)
    }

    fn alloc(&mut self, code: ScriptCode, prev: Option<usize>, next: Option<usize>) -> usize {
        self.nodes.push(CodeNode { code, prev, next });
        self.nodes.len() - 1
    }

    /// Append `code`. Fails without touching the list once it holds `MAX_CODES` codes.
    pub fn push_back(&mut self, code: ScriptCode) -> Result<Location, CompilerError> {
        self.ensure_capacity()?;
        let slot = self.alloc(code, self.tail, None);
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        Ok(self.location(slot))
    }

    /// Prepend `code`. Fails without touching the list once it holds `MAX_CODES` codes.
    pub fn push_front(&mut self, code: ScriptCode) -> Result<Location, CompilerError> {
        self.ensure_capacity()?;
        let slot = self.alloc(code, None, self.head);
        match self.head {
            Some(head) => self.nodes[head].prev = Some(slot),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
        Ok(self.location(slot))
    }

    /// Insert `code` immediately before `location`
    pub fn insert_before(
        &mut self,
        location: Location,
        code: ScriptCode,
    ) -> Result<Location, CompilerError> {
        let at = self.resolve(location)?;
        let Some(prev) = self.nodes[at].prev else {
            return self.push_front(code);
        };
        self.ensure_capacity()?;

        let slot = self.alloc(code, Some(prev), Some(at));
        self.nodes[prev].next = Some(slot);
        self.nodes[at].prev = Some(slot);
        log::trace!("Spliced code {} before slot {}", code, at);
        Ok(self.location(slot))
    }

    /// Insert `code` immediately after `location`
    pub fn insert_after(
        &mut self,
        location: Location,
        code: ScriptCode,
    ) -> Result<Location, CompilerError> {
        let at = self.resolve(location)?;
        let Some(next) = self.nodes[at].next else {
            return self.push_back(code);
        };
        self.ensure_capacity()?;

        let slot = self.alloc(code, Some(at), Some(next));
        self.nodes[next].prev = Some(slot);
        self.nodes[at].next = Some(slot);
        log::trace!("Spliced code {} after slot {}", code, at);
        Ok(self.location(slot))
    }

    pub fn front(&self) -> Option<ScriptCode> {
        self.head.map(|slot| self.nodes[slot].code)
    }

    pub fn back(&self) -> Option<ScriptCode> {
        self.tail.map(|slot| self.nodes[slot].code)
    }

    pub fn front_location(&self) -> Option<Location> {
        self.head.map(|slot| self.location(slot))
    }

    pub fn back_location(&self) -> Option<Location> {
        self.tail.map(|slot| self.location(slot))
    }

    pub fn get(&self, location: Location) -> Result<ScriptCode, CompilerError> {
        let slot = self.resolve(location)?;
        Ok(self.nodes[slot].code)
    }

    /// Overwrite the code at `location`, e.g. to patch a reserved placeholder
    pub fn set(&mut self, location: Location, code: ScriptCode) -> Result<(), CompilerError> {
        let slot = self.resolve(location)?;
        log::trace!(
            "Patched slot {}: {} -> {}",
            slot,
            self.nodes[slot].code,
            code
        );
        self.nodes[slot].code = code;
        Ok(())
    }

    /// Drop every code. Locations handed out before the clear become stale.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Codes in list order, front to back
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            builder: self,
            cursor: self.head,
        }
    }

    pub fn to_vec(&self) -> Vec<ScriptCode> {
        self.iter().collect()
    }

    /// Write the list, front to back, into `target`'s code array starting at
    /// slot 0. At most `MAX_CODES` codes are written.
    pub fn build(&self, target: &mut Script) -> Result<(), CompilerError> {
        let mut written = 0;
        for (index, code) in self.iter().take(MAX_CODES).enumerate() {
            target.set_code(index, code)?;
            written += 1;
        }
        log::debug!("Built {} codes into script", written);
        Ok(())
    }
}

pub struct Iter<'a> {
    builder: &'a CodeBuilder,
    cursor: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = ScriptCode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.builder.nodes[self.cursor?];
        self.cursor = node.next;
        Some(node.code)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.builder.len()))
    }
}

impl<'a> IntoIterator for &'a CodeBuilder {
    type Item = ScriptCode;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "code_builder_tests.rs"]
mod tests;
