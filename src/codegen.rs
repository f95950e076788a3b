//! Go struct declarations from normalized body trees.
//!
//! Output for one body looks like:
//!
//! ```text
//! // title: Create node
//! // method: POST    path: /node/create
//! type Node/createReqDto struct {
//! 	Labels []string `json:"labels"`
//! 	Name string `json:"name" binding:"required"` // node name
//! 	Ports []struct {
//! 		Port int `json:"port" binding:"required"`
//! 	} `json:"ports"` // exposed ports
//! }
//! ```
use crate::error::Result;
use crate::field::{Field, Members, Shape};
use crate::ident::upper_first;
use crate::naming::Suffixes;
use crate::norm;
use crate::schema::Body;
use crate::type_map;

const INDENT: &str = "\t";

// ————————————————————————————————————————————————————————————————————————————
// ENTRY
// ————————————————————————————————————————————————————————————————————————————

/// Normalize and render one body into its declaration text.
pub fn render(body: Body<'_>, suffixes: &Suffixes) -> Result<String> {
    let name = body.declaration_name(suffixes);
    let mut cg = Codegen::new();
    cg.emit(body, &name)?;
    Ok(cg.into_string())
}

#[derive(Debug, Default)]
pub struct Codegen {
    out: String,
}

impl Codegen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the commented header and `type <name> ...` for `body`.
    pub fn emit(&mut self, body: Body<'_>, name: &str) -> Result<()> {
        let Body { api, mut field, role } = body;
        norm::normalize(&mut field)?;
        tracing::trace!(%role, path = %api.path, "rendering {name}");

        self.out.push_str(&format!("// title: {}\n", one_line(&api.title)));
        self.out.push_str(&format!("// method: {}    path: {}\n", api.method, api.path));
        self.out.push_str(&format!("type {name} "));
        self.type_expr(&field, 0)?;
        self.out.push('\n');
        Ok(())
    }

    pub fn into_string(self) -> String {
        self.out
    }

    // ------------------------------ internals ----------------------------- //

    fn type_expr(&mut self, field: &Field, depth: usize) -> Result<()> {
        let sequence = "[]".repeat(field.repeat);
        match &field.shape {
            Shape::Primitive { ty } => {
                self.out.push_str(&sequence);
                self.out.push_str(type_map::convert(ty)?);
            }
            Shape::Object(members) => {
                self.out.push_str(&sequence);
                self.structure(members, depth)?;
            }
            // not reached through `emit`; fold first so any tree renders
            Shape::Array { .. } => self.type_expr(&norm::normalized(field.clone())?, depth)?,
        }
        Ok(())
    }

    fn structure(&mut self, members: &Members, depth: usize) -> Result<()> {
        if members.properties.is_empty() {
            self.out.push_str("struct {}");
            return Ok(());
        }
        self.out.push_str("struct {\n");

        let mut keys = members.properties.keys().collect::<Vec<_>>();
        keys.sort();
        for key in keys {
            let child = &members.properties[key];
            self.indent(depth + 1);
            self.out.push_str(&upper_first(key));
            self.out.push(' ');
            self.type_expr(child, depth + 1)?;
            self.out.push_str(&tag(key, members.is_required(key)));
            if !child.description.trim().is_empty() {
                self.out.push_str(" // ");
                self.out.push_str(&one_line(&child.description));
            }
            self.out.push('\n');
        }

        self.indent(depth);
        self.out.push('}');
        Ok(())
    }

    fn indent(&mut self, depth: usize) {
        self.out.push_str(&INDENT.repeat(depth));
    }
}

fn tag(key: &str, required: bool) -> String {
    if required {
        format!(" `json:\"{key}\" binding:\"required\"`")
    } else {
        format!(" `json:\"{key}\"`")
    }
}

/// Collapse line breaks so a description stays inside its `//` comment.
fn one_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ------------------------------- Tests ------------------------------------ //
