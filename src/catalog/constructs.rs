use super::rules::ConstructRule;

/// Statement prefixes, tested in order against each trimmed line.
pub const CONSTRUCTS: &[ConstructRule] = &[
    ConstructRule::definition("def ", "Function definition"),
    ConstructRule::definition("class ", "Class definition"),
    ConstructRule::statement("import ", "Module import"),
    ConstructRule::statement("from ", "From import"),
    ConstructRule::statement("if ", "Conditional statement"),
    ConstructRule::statement("for ", "For loop"),
    ConstructRule::statement("while ", "While loop"),
    ConstructRule::statement("try:", "Try block"),
    ConstructRule::statement("except", "Exception handler"),
    ConstructRule::statement("with ", "Context manager"),
    ConstructRule::statement("return ", "Return statement"),
    ConstructRule::statement("yield ", "Generator yield"),
    ConstructRule::statement("lambda ", "Lambda function"),
    ConstructRule::statement("async ", "Async definition"),
    ConstructRule::statement("await ", "Await expression"),
];

/// Keywords that open a conditional; lines starting with them are never
/// classified as assignments.
pub const CONDITIONAL_KEYWORDS: &[&str] = &["if", "elif", "while"];

/// Keywords that open an indented block and therefore end in `:`.
pub const BLOCK_KEYWORDS: &[&str] = &[
    "if", "elif", "else", "for", "while", "try", "except", "finally", "with", "def", "class",
    "async",
];
