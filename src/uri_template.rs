//! RFC 6570 URI templates.
//!
//! All level 4 operators are supported; the prefix modifier only applies
//! to scalar values and is ignored for lists. Variables that are
//! absent, or lists that are empty, are undefined and vanish from the
//! expansion along with their names.
//!
//! ```
//! use dnsmadeeasy::uri_template::{expand, Variables};
//!
//! let vars = Variables::new().add("rows", 10).add_if_some("page", None::<u32>);
//! assert_eq!(expand("/dns/managed{?rows,page}", &vars).unwrap(), "/dns/managed?rows=10");
//! ```

use std::collections::BTreeMap;

use crate::TemplateError;

/// The value bound to a template variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Scalar(String),
    List(Vec<String>),
}

/// Variables to expand a template with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variables {
    vars: BTreeMap<String, Value>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to a scalar value.
    pub fn add<T: ToString>(mut self, name: &str, value: T) -> Self {
        self.vars
            .insert(name.to_string(), Value::Scalar(value.to_string()));
        self
    }

    /// In the case that `value` is some, binds `name` to it.
    pub fn add_if_some<T: ToString>(self, name: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.add(name, value),
            None => self,
        }
    }

    /// Binds `name` to a list value.
    pub fn add_list<I, T>(mut self, name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        self.vars.insert(
            name.to_string(),
            Value::List(values.into_iter().map(|v| v.to_string()).collect()),
        );
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// How an expression's operator renders its variables.
struct Operator {
    first: &'static str,
    separator: &'static str,
    named: bool,
    if_empty: &'static str,
    allow_reserved: bool,
}

impl Operator {
    fn from_char(c: char) -> Option<Self> {
        let (first, separator, named, if_empty, allow_reserved) = match c {
            '+' => ("", ",", false, "", true),
            '#' => ("#", ",", false, "", true),
            '.' => (".", ".", false, "", false),
            '/' => ("/", "/", false, "", false),
            ';' => (";", ";", true, "", false),
            '?' => ("?", "&", true, "=", false),
            '&' => ("&", "&", true, "=", false),
            _ => return None,
        };
        Some(Self {
            first,
            separator,
            named,
            if_empty,
            allow_reserved,
        })
    }

    fn simple() -> Self {
        Self {
            first: "",
            separator: ",",
            named: false,
            if_empty: "",
            allow_reserved: false,
        }
    }

    fn encode(&self, value: &str) -> String {
        if !self.allow_reserved {
            return urlencoding::encode(value).into_owned();
        }

        let mut out = String::with_capacity(value.len());
        let mut buf = [0u8; 4];
        for c in value.chars() {
            if c.is_ascii_alphanumeric() || "-._~:/?#[]@!$&'()*+,;=%".contains(c) {
                out.push(c);
            } else {
                out.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
            }
        }
        out
    }
}

enum Modifier {
    None,
    Prefix(usize),
    Explode,
}

struct VarSpec<'a> {
    name: &'a str,
    modifier: Modifier,
}

fn parse_varspec<'a>(template: &str, spec: &'a str) -> Result<VarSpec<'a>, TemplateError> {
    let invalid = || TemplateError::InvalidVariable {
        template: template.to_string(),
        name: spec.to_string(),
    };

    let (name, modifier) = if let Some(name) = spec.strip_suffix('*') {
        (name, Modifier::Explode)
    } else if let Some((name, len)) = spec.split_once(':') {
        let len = len
            .parse::<usize>()
            .ok()
            .filter(|l| (1..10000).contains(l))
            .ok_or_else(invalid)?;
        (name, Modifier::Prefix(len))
    } else {
        (spec, Modifier::None)
    };

    if name.is_empty()
        || !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '%')
    {
        return Err(invalid());
    }

    Ok(VarSpec { name, modifier })
}

fn expand_expression(
    template: &str,
    expression: &str,
    position: usize,
    vars: &Variables,
    out: &mut String,
) -> Result<(), TemplateError> {
    let mut chars = expression.chars();
    let (operator, list) = match chars.next().and_then(Operator::from_char) {
        Some(operator) => (operator, chars.as_str()),
        None => (Operator::simple(), expression),
    };

    if list.is_empty() {
        return Err(TemplateError::EmptyExpression {
            template: template.to_string(),
            position,
        });
    }

    let mut first = true;
    for spec in list.split(',') {
        let spec = parse_varspec(template, spec)?;

        let value = match vars.get(spec.name) {
            None => continue,
            Some(Value::List(items)) if items.is_empty() => continue,
            Some(value) => value,
        };

        out.push_str(if first {
            operator.first
        } else {
            operator.separator
        });
        first = false;

        match value {
            Value::Scalar(s) => {
                let s = match spec.modifier {
                    Modifier::Prefix(len) => s.chars().take(len).collect(),
                    _ => s.clone(),
                };
                if operator.named {
                    out.push_str(spec.name);
                    if s.is_empty() {
                        out.push_str(operator.if_empty);
                        continue;
                    }
                    out.push('=');
                }
                out.push_str(&operator.encode(&s));
            }
            Value::List(items) => {
                if let Modifier::Explode = spec.modifier {
                    let parts = items.iter().map(|item| {
                        if !operator.named {
                            operator.encode(item)
                        } else if item.is_empty() {
                            format!("{}{}", spec.name, operator.if_empty)
                        } else {
                            format!("{}={}", spec.name, operator.encode(item))
                        }
                    });
                    out.push_str(&parts.collect::<Vec<_>>().join(operator.separator));
                } else {
                    if operator.named {
                        out.push_str(spec.name);
                        out.push('=');
                    }
                    let parts = items.iter().map(|item| operator.encode(item));
                    out.push_str(&parts.collect::<Vec<_>>().join(","));
                }
            }
        }
    }

    Ok(())
}

/// Expands `template` with `vars`.
///
/// # Errors
/// - `Unclosed` if a `{` has no matching `}`.
/// - `EmptyExpression` for `{}` or an operator with no variables.
/// - `InvalidVariable` for a malformed variable specification.
pub fn expand(template: &str, vars: &Variables) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut offset = 0;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let position = offset + start;
        let end = rest[start..]
            .find('}')
            .ok_or_else(|| TemplateError::Unclosed {
                template: template.to_string(),
                position,
            })?;

        expand_expression(template, &rest[start + 1..start + end], position, vars, &mut out)?;

        rest = &rest[start + end + 1..];
        offset = position + end + 1;
    }
    out.push_str(rest);

    Ok(out)
}

#[cfg(test)]
mod tests;
