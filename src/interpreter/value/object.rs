use std::{any::Any, fmt, sync::Arc};

/// A shared handle to a value the expression language cannot inspect.
///
/// Cloning the handle shares the underlying value. Two handles are equal
/// only when they point at the same allocation.
///
/// # Example
/// ```
/// use reckon::interpreter::value::object::Object;
///
/// let a = Object::new(vec![1u8, 2, 3]);
/// let b = a.clone();
/// let c = Object::new(vec![1u8, 2, 3]);
///
/// assert_eq!(a, b);
/// assert_ne!(a, c);
/// assert_eq!(a.downcast_ref::<Vec<u8>>().map(Vec::len), Some(3));
/// ```
#[derive(Clone)]
pub struct Object(Arc<dyn Any + Send + Sync>);

impl Object {
    /// Wraps `value` in a new handle.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Returns the wrapped value if it has type `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }

    /// Whether both handles point at the same value.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Object(..)")
    }
}
