//! Landing listing of the visualization tools.

use serde::Serialize;

/// One entry of the tool landing listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolInfo {
    pub name: &'static str,
    /// CLI subcommand that runs the tool, when it ships with this build.
    pub command: Option<&'static str>,
    pub description: &'static str,
}

impl ToolInfo {
    pub fn is_available(&self) -> bool {
        self.command.is_some()
    }
}

const TOOLS: [ToolInfo; 5] = [
    ToolInfo {
        name: "Visualize Amino Acids",
        command: None,
        description: "Graphical representations of amino acids and their molecular \
                      structures and interactions within proteins.",
    },
    ToolInfo {
        name: "Read PDB",
        command: None,
        description: "Fetch comprehensive protein data for quick access during analysis.",
    },
    ToolInfo {
        name: "Identify Ligand",
        command: None,
        description: "Identify ligands or binding sites and their x, y, z coordinates.",
    },
    ToolInfo {
        name: "Genome Data",
        command: Some("genome"),
        description: "3D genome view with domain layer derived from an uploaded PDB file.",
    },
    ToolInfo {
        name: "Protein Feature Visualization",
        command: Some("features"),
        description: "Bar chart of UniProt protein features fetched from the EBI Proteins API.",
    },
];

/// All tools in landing order.
pub fn tool_registry() -> &'static [ToolInfo] {
    &TOOLS
}
