use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use crate::{
    ast::{FieldDef, FunctionDef},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{read, write},
        },
        value::core::Value,
    },
};

/// Declarations visible from every call depth and every thread.
///
/// Enums, struct definitions and functions are registered once and never go
/// out of scope. Each table has its own lock so a lookup never waits on an
/// unrelated declaration.
#[derive(Default)]
pub struct Registry {
    enums:     RwLock<HashMap<String, Vec<String>>>,
    structs:   RwLock<HashMap<String, Arc<Vec<FieldDef>>>>,
    functions: RwLock<HashMap<String, Arc<FunctionDef>>>,
}

impl Registry {
    /// Registers an enum, replacing any earlier enum of the same name.
    pub fn declare_enum(&self, name: &str, values: &[String]) {
        write(&self.enums).insert(name.to_string(), values.to_vec());
    }

    /// Resolves `Enum::Value` to its 0-based ordinal.
    ///
    /// # Example
    /// ```
    /// use hrl::interpreter::evaluator::registry::Registry;
    ///
    /// let registry = Registry::default();
    /// registry.declare_enum("Color", &["RED".into(), "GREEN".into(), "BLUE".into()]);
    ///
    /// assert_eq!(registry.enum_ordinal("Color", "GREEN", 1).unwrap(), 1);
    /// assert!(registry.enum_ordinal("Color", "PINK", 1).is_err());
    /// assert!(registry.enum_ordinal("Shape", "RED", 1).is_err());
    /// ```
    pub fn enum_ordinal(&self, enum_name: &str, value_name: &str, line: usize) -> EvalResult<i64> {
        let enums = read(&self.enums);
        let values = enums.get(enum_name)
                          .ok_or_else(|| RuntimeError::UnknownEnum { name: enum_name.to_string(),
                                                                     line })?;
        values.iter()
              .position(|v| v == value_name)
              .and_then(|position| i64::try_from(position).ok())
              .ok_or_else(|| RuntimeError::UnknownEnumValue { enum_name:  enum_name.to_string(),
                                                              value_name: value_name.to_string(),
                                                              line })
    }

    /// Registers a struct definition, replacing any earlier one of the same
    /// name.
    pub fn declare_struct(&self, name: &str, fields: &[FieldDef]) {
        write(&self.structs).insert(name.to_string(), Arc::new(fields.to_vec()));
    }

    /// Returns the field list of a declared struct.
    #[must_use]
    pub fn struct_fields(&self, name: &str) -> Option<Arc<Vec<FieldDef>>> {
        read(&self.structs).get(name).cloned()
    }

    /// Registers a function.
    ///
    /// # Errors
    /// Returns `RuntimeError::FunctionAlreadyDefined` if the name is taken;
    /// functions are never redefined.
    pub fn declare_function(&self, def: &Arc<FunctionDef>) -> EvalResult<()> {
        let mut functions = write(&self.functions);
        if functions.contains_key(&def.name) {
            return Err(RuntimeError::FunctionAlreadyDefined { name: def.name.clone(),
                                                              line: def.line, });
        }
        functions.insert(def.name.clone(), Arc::clone(def));
        Ok(())
    }

    /// Looks up a user-defined function.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<Arc<FunctionDef>> {
        read(&self.functions).get(name).cloned()
    }
}

/// A struct value bound to a name in a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct StructInstance {
    /// Name of the struct definition this instance was created from.
    pub struct_name: String,
    /// Field values in declaration order.
    pub fields:      Vec<(String, Value)>,
}

impl StructInstance {
    /// Creates an instance with every field set to its type's default.
    #[must_use]
    pub fn with_defaults(struct_name: &str, fields: &[FieldDef]) -> Self {
        Self { struct_name: struct_name.to_string(),
               fields:      fields.iter()
                                  .map(|f| (f.name.clone(), Value::default_for_type(&f.type_name)))
                                  .collect(), }
    }

    /// Reads a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.iter().find(|(name, _)| name == field).map(|(_, v)| v)
    }

    /// Mutable access to a field.
    pub fn get_mut(&mut self, field: &str) -> Option<&mut Value> {
        self.fields.iter_mut().find(|(name, _)| name == field).map(|(_, v)| v)
    }
}

/// The variables and struct instances of one function activation.
///
/// The top level (`setup`, `main` and every threadloop started from them)
/// shares a single frame. A function call starts a fresh frame holding only
/// its parameters; nothing from the caller is visible inside it.
#[derive(Debug, Default)]
pub struct Frame {
    /// Scalar and array variables.
    pub variables: HashMap<String, Value>,
    /// Struct instances, kept apart from variables.
    pub instances: HashMap<String, StructInstance>,
}

impl Frame {
    /// Creates a frame with the given parameter bindings.
    #[must_use]
    pub fn with_bindings(bindings: impl IntoIterator<Item = (String, Value)>) -> Self {
        Self { variables: bindings.into_iter().collect(),
               instances: HashMap::new(), }
    }

    /// Returns `true` if `name` is bound to a variable or a struct instance.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name) || self.instances.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Block;

    fn function(name: &str, line: usize) -> Arc<FunctionDef> {
        Arc::new(FunctionDef { name: name.to_string(),
                               params: Vec::new(),
                               body: Block::default(),
                               line })
    }

    #[test]
    fn functions_are_declared_once() {
        let registry = Registry::default();
        registry.declare_function(&function("f", 1)).unwrap();
        assert_eq!(registry.declare_function(&function("f", 4)),
                   Err(RuntimeError::FunctionAlreadyDefined { name: "f".to_string(),
                                                              line: 4, }));
        assert!(registry.function("f").is_some());
        assert!(registry.function("g").is_none());
    }

    #[test]
    fn enum_redeclaration_replaces() {
        let registry = Registry::default();
        registry.declare_enum("E", &["A".into(), "B".into()]);
        registry.declare_enum("E", &["B".into()]);
        assert_eq!(registry.enum_ordinal("E", "B", 1).unwrap(), 0);
    }

    #[test]
    fn struct_instances_start_at_defaults() {
        let fields = vec![FieldDef { type_name: "int".into(),
                                     name:      "x".into(), },
                          FieldDef { type_name: "string".into(),
                                     name:      "label".into(), }];
        let mut point = StructInstance::with_defaults("Point", &fields);
        assert_eq!(point.get("x"), Some(&Value::Integer(0)));
        assert_eq!(point.get("label"), Some(&Value::String(String::new())));

        *point.get_mut("x").unwrap() = Value::Integer(9);
        assert_eq!(point.get("x"), Some(&Value::Integer(9)));
        assert!(point.get("z").is_none());
    }
}
