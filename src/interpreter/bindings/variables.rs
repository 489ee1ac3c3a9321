use crate::interpreter::{bindings::same_name, value::core::Variant};

/// A named value.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    name:  String,
    value: Variant,
}

impl Variable {
    /// Creates a variable holding `value`.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<Variant>) -> Self {
        Self { name:  name.into(),
               value: value.into(), }
    }

    /// Creates a variable holding null.
    #[must_use]
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, Variant::Null)
    }

    /// The variable name, as it was declared.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current value.
    #[must_use]
    pub const fn value(&self) -> &Variant {
        &self.value
    }

    /// Replaces the current value.
    pub fn set_value(&mut self, value: impl Into<Variant>) {
        self.value = value.into();
    }
}

/// Resolves variable names during evaluation.
pub trait VariableLookup {
    /// Finds a variable by name, ignoring case.
    fn find_by_name(&self, name: &str) -> Option<&Variable>;
}

/// An ordered set of variables with case-insensitive names.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     bindings::variables::{Variable, VariableCollection, VariableLookup},
///     value::core::Variant,
/// };
///
/// let mut vars = VariableCollection::new();
/// vars.add(Variable::new("Price", 10));
/// vars.insert("price", 12);
///
/// assert_eq!(vars.len(), 1);
/// assert_eq!(vars.find_by_name("PRICE").unwrap().value(), &Variant::Integer(12));
/// assert_eq!(vars.find_by_name("PRICE").unwrap().name(), "price");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableCollection {
    variables: Vec<Variable>,
}

impl VariableCollection {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { variables: Vec::new() }
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.variables
            .iter()
            .position(|variable| same_name(&variable.name, name))
    }

    /// Adds `variable`, replacing any variable with the same name.
    pub fn add(&mut self, variable: Variable) {
        match self.index_of(&variable.name) {
            Some(index) => self.variables[index] = variable,
            None => self.variables.push(variable),
        }
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Variant>) {
        self.add(Variable::new(name, value));
    }

    /// Returns the variable called `name`, creating a null one if missing.
    pub fn locate(&mut self, name: &str) -> &mut Variable {
        let index = self.index_of(name).unwrap_or_else(|| {
                                            self.variables.push(Variable::empty(name));
                                            self.variables.len() - 1
                                        });
        &mut self.variables[index]
    }

    /// Finds a variable by name for modification.
    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Variable> {
        self.index_of(name).map(|index| &mut self.variables[index])
    }

    /// Removes and returns the variable called `name`.
    pub fn remove_by_name(&mut self, name: &str) -> Option<Variable> {
        self.index_of(name).map(|index| self.variables.remove(index))
    }

    /// Removes every variable.
    pub fn clear(&mut self) {
        self.variables.clear();
    }

    /// Resets every value to null, keeping the names.
    pub fn clear_values(&mut self) {
        for variable in &mut self.variables {
            variable.value = Variant::Null;
        }
    }

    /// Iterates the variables in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Variable> {
        self.variables.iter()
    }

    /// Number of variables.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl VariableLookup for VariableCollection {
    fn find_by_name(&self, name: &str) -> Option<&Variable> {
        self.index_of(name).map(|index| &self.variables[index])
    }
}

impl<'a> IntoIterator for &'a VariableCollection {
    type IntoIter = std::slice::Iter<'a, Variable>;
    type Item = &'a Variable;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Variable> for VariableCollection {
    fn from_iter<I: IntoIterator<Item = Variable>>(iter: I) -> Self {
        let mut collection = Self::new();
        for variable in iter {
            collection.add(variable);
        }
        collection
    }
}
