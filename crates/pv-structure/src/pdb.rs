//! PDB reading on top of `pdbtbx`.
//!
//! Only the first model is kept. Atoms are grouped into chains and residues
//! in file order, which is all the genome layout needs.

use std::path::Path;

use pdbtbx::{PDB, PDBError, StrictnessLevel};
use serde::Serialize;
use tracing::debug;

use crate::error::ParseError;

/// Chain label used when a chain has a blank identifier.
pub const DEFAULT_CHAIN: &str = "A";

/// A residue and the number of atoms recorded for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Residue {
    pub number: i64,
    pub insertion_code: Option<String>,
    pub name: String,
    pub atom_count: usize,
}

/// Residues of one chain, in file order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chain {
    pub id: String,
    pub residues: Vec<Residue>,
}

/// Parsed molecule, reduced to its first model.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Structure {
    pub id_code: Option<String>,
    pub chains: Vec<Chain>,
    pub atom_count: usize,
}

impl Structure {
    pub fn residue_count(&self) -> usize {
        self.chains.iter().map(|chain| chain.residues.len()).sum()
    }

    /// Keep the first model of `pdb`.
    pub fn from_pdb(pdb: &PDB) -> Result<Self, ParseError> {
        let model = pdb.models().next().ok_or(ParseError::NoAtoms)?;
        let atom_count = model.atom_count();
        if atom_count == 0 {
            return Err(ParseError::NoAtoms);
        }
        let chains = model
            .chains()
            .map(|chain| Chain {
                id: chain_label(chain.id()),
                residues: chain
                    .residues()
                    .map(|residue| Residue {
                        number: residue.serial_number() as i64,
                        insertion_code: residue.insertion_code().map(str::to_string),
                        name: residue.name().unwrap_or_default().to_string(),
                        atom_count: residue.atom_count(),
                    })
                    .collect(),
            })
            .filter(|chain| !chain.residues.is_empty())
            .collect();
        Ok(Self {
            id_code: pdb.identifier.clone(),
            chains,
            atom_count,
        })
    }
}

fn chain_label(id: &str) -> String {
    match id.trim() {
        "" => DEFAULT_CHAIN.to_string(),
        id => id.to_string(),
    }
}

/// Turns a structure file into a [`Structure`].
pub trait StructureParser {
    fn parse_path(&self, path: &Path) -> Result<Structure, ParseError>;
}

/// Reader for the PDB format.
///
/// Reads loosely: only errors that break the file fail the parse, the rest
/// are logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdbParser;

impl StructureParser for PdbParser {
    fn parse_path(&self, path: &Path) -> Result<Structure, ParseError> {
        let name = path.to_str().ok_or_else(|| ParseError::NonUtf8Path {
            path: path.to_path_buf(),
        })?;
        let (pdb, warnings) =
            pdbtbx::open_pdb(name, StrictnessLevel::Loose).map_err(|errors| invalid(&errors))?;
        if !warnings.is_empty() {
            debug!(warnings = warnings.len(), "PDB file read with warnings");
        }

        let structure = Structure::from_pdb(&pdb)?;
        debug!(
            id_code = structure.id_code.as_deref().unwrap_or("-"),
            chains = structure.chains.len(),
            residues = structure.residue_count(),
            atoms = structure.atom_count,
            "parsed PDB structure"
        );
        Ok(structure)
    }
}

fn invalid(errors: &[PDBError]) -> ParseError {
    let reason = errors.first().map_or_else(
        || "unreadable structure file".to_string(),
        |error| error.short_description().to_string(),
    );
    ParseError::Invalid {
        reason,
        errors: errors.len(),
    }
}
