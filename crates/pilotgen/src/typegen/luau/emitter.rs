//! Part type emission.

use crate::config::Config;
use crate::resolve::{Method, MethodKind, Param, Part};

/// Luau emitter for resolved parts.
pub struct Emitter<'a> {
    config: &'a Config,
}

impl<'a> Emitter<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Emit `type Name = {...}` for one part.
    ///
    /// Members appear in a fixed order: methods, properties, then the
    /// combined `Connect` overload set.
    pub fn emit_part(&self, part: &Part) -> String {
        let mut members = Vec::with_capacity(part.methods.len() + part.properties.len() + 1);

        for (name, method) in &part.methods {
            members.push(self.method_member(part, name, method));
        }

        for (name, ty) in &part.properties {
            members.push(format!("{name}: {ty}"));
        }

        members.push(self.connect_member(part));

        let indent = &self.config.indent;
        let separator = format!(",\n{indent}");
        format!(
            "type {} = {{\n{indent}{}\n}}",
            part.name,
            members.join(separator.as_str())
        )
    }

    fn method_member(&self, part: &Part, name: &str, method: &Method) -> String {
        let mut params = vec![self_param(part)];

        match &method.kind {
            MethodKind::Configure => {
                params.push(format!("properties: {}", self.configure_record(part)));
            }
            MethodKind::Call { arguments } => {
                params.extend(arguments.iter().map(render_param));
            }
        }

        let returns = method.returns.as_deref().unwrap_or(&self.config.unit_type);
        format!("{name}: ({}) -> {returns}", params.join(", "))
    }

    /// `{Field: Type?, ...}` over every writable property.
    fn configure_record(&self, part: &Part) -> String {
        let fields: Vec<_> = part
            .properties
            .iter()
            .filter(|(name, _)| !self.config.is_readonly(name))
            .map(|(name, ty)| format!("{name}: {ty}?"))
            .collect();
        format!("{{{}}}", fields.join(", "))
    }

    fn connect_member(&self, part: &Part) -> String {
        let overloads: Vec<_> = part
            .events
            .iter()
            .map(|(event, args)| {
                let args: Vec<_> = args.iter().map(render_param).collect();
                format!(
                    "(({}, event: \"{event}\", callback: ({}) -> {}) -> {})",
                    self_param(part),
                    args.join(", "),
                    self.config.unit_type,
                    self.config.connection_type,
                )
            })
            .collect();

        let indent = &self.config.indent;
        let separator = format!("\n{indent}{indent}& ");
        format!("Connect: {}", overloads.join(separator.as_str()))
    }
}

fn self_param(part: &Part) -> String {
    format!("self: {}", part.name)
}

fn render_param(param: &Param) -> String {
    format!("{}: {}", param.name, param.ty)
}
