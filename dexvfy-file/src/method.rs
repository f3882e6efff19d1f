use std::fmt;

/// Identity of a method, used when reporting a rejection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodId {
    /// Declaring class, e.g. `Lcom/example/Foo;`.
    pub class_descriptor: String,
    pub name: String,
    /// Prototype descriptor, e.g. `(ILjava/lang/String;)V`.
    pub proto: String,
}

impl MethodId {
    pub fn new(
        class_descriptor: impl Into<String>,
        name: impl Into<String>,
        proto: impl Into<String>,
    ) -> Self {
        Self {
            class_descriptor: class_descriptor.into(),
            name: name.into(),
            proto: proto.into(),
        }
    }
}

impl fmt::Display for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{} {}", self.class_descriptor, self.name, self.proto)
    }
}

/// Convert a type descriptor to its dotted source form.
///
/// `Lcom/example/Foo;` becomes `com.example.Foo`. Anything that is not a plain
/// class descriptor (primitives, arrays) only has its slashes replaced.
pub fn descriptor_to_dot(descriptor: &str) -> String {
    let inner = descriptor
        .strip_prefix('L')
        .and_then(|d| d.strip_suffix(';'))
        .unwrap_or(descriptor);
    inner.replace('/', ".")
}
