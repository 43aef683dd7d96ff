use hashbrown::HashMap;

/// Named functions recognized in expressions. They all take a single argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// `sin`
    Sin,
    /// `cos`
    Cos,
    /// `tan`
    Tan,
}

lazy_static! {
    /// Recognized function names, in lowercase
    pub static ref FUNCTIONS: HashMap<&'static str, Function> = {
        let mut map = HashMap::<&'static str, Function>::new();
        map.insert("sin", Function::Sin);
        map.insert("cos", Function::Cos);
        map.insert("tan", Function::Tan);
        map.shrink_to_fit();
        map
    };
}

impl Function {
    /// Look up a function by name, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        FUNCTIONS.get(name.to_ascii_lowercase().as_str()).copied()
    }

    /// Canonical lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
        }
    }

    /// Number of arguments consumed by the function
    pub fn arity(self) -> usize {
        1
    }
}

#[must_use]
/// Check if `name` is a recognized function name
///
/// # Examples
///
/// ```
/// # use postfix::is_function;
///
/// assert_eq!(is_function("sin"), true);
/// assert_eq!(is_function("COS"), true);
/// assert_eq!(is_function("sinx"), false);
/// ```
pub fn is_function(name: &str) -> bool {
    Function::from_name(name).is_some()
}
