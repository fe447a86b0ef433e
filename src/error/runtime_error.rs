/// Represents all errors that can occur while building the machine and while
/// running a program.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// Two structs share a name.
    #[error("Error on line {line}: Struct '{name}' is already declared.")]
    DuplicateStruct {
        /// The name of the struct.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Two functions share a name.
    #[error("Error on line {line}: Function '{name}' is already declared.")]
    DuplicateFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted to redefine a built-in function.
    #[error("Error on line {line}: Function '{name}' is built in and cannot be redefined.")]
    BuiltinFunctionRedefinition {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The program has no entry point.
    #[error("Program has no '{name}' function.")]
    MissingEntryPoint {
        /// The entry point name.
        name: &'static str,
    },
    /// The entry point takes arguments or returns a value.
    #[error("Error on line {line}: Function '{name}' must take no arguments and return ештеңе.")]
    InvalidEntryPoint {
        /// The entry point name.
        name: &'static str,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to use an undefined variable.
    #[error("Error on line {line}: Unknown variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a name that is neither a user function nor a builtin.
    #[error("Error on line {line}: Unknown function '{name}'.")]
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A type refers to a struct that was never declared.
    #[error("Error on line {line}: Unknown struct '{name}'.")]
    UnknownStruct {
        /// The name of the struct.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Selected a field the struct does not have.
    #[error("Error on line {line}: Struct '{struct_name}' has no field '{field}'.")]
    UnknownField {
        /// The struct type.
        struct_name: String,
        /// The missing field.
        field:       String,
        /// The source line where the error occurred.
        line:        usize,
    },
    /// Declared a variable that already exists in the same scope.
    #[error("Error on line {line}: Variable '{name}' is already declared in this scope.")]
    VariableExists {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The operands of a binary operator have different types.
    #[error("Error on line {line}: Mismatched operand types for '{op}': {left} and {right}.")]
    OperandTypeMismatch {
        /// The operator.
        op:    String,
        /// Type of the left operand.
        left:  String,
        /// Type of the right operand.
        right: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The operator is not defined for the operand type.
    #[error("Error on line {line}: Operator '{op}' is not defined for {ty}.")]
    UnsupportedOperator {
        /// The operator.
        op:   String,
        /// Type of the operand(s).
        ty:   String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function with the wrong number of arguments.
    #[error("Error on line {line}: Function '{name}' expects {expected} argument(s), got {found}.")]
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// Number of declared parameters.
        expected: usize,
        /// Number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A function returned a value of the wrong type.
    #[error("Error on line {line}: Function '{name}' must return {expected}, got {found}.")]
    ReturnTypeMismatch {
        /// The name of the function.
        name:     String,
        /// The declared return type.
        expected: String,
        /// The returned type.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A function with a return type finished without returning a value.
    #[error("Error on line {line}: Function '{name}' must return a value of type {expected}.")]
    MissingReturnValue {
        /// The name of the function.
        name:     String,
        /// The declared return type.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The result of a call without a value was used in an expression.
    #[error("Error on line {line}: Call to '{name}' does not produce a value.")]
    NoValue {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A variable initializer does not match the declared type.
    #[error("Error on line {line}: Cannot initialize '{name}' of type {expected} with {found}.")]
    DeclarationTypeMismatch {
        /// The name of the variable.
        name:     String,
        /// The declared type.
        expected: String,
        /// The initializer's type.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An assigned value does not match the type of the value it replaces.
    #[error("Error on line {line}: Cannot assign {found} to a location of type {expected}.")]
    AssignmentTypeMismatch {
        /// The type of the current value.
        expected: String,
        /// The assigned type.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Array literal elements of different types.
    #[error("Error on line {line}: Array elements must share one type: {expected} and {found}.")]
    MixedArrayElements {
        /// The type of the first element.
        expected: String,
        /// The type of the offending element.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Indexed a value that is not an array.
    #[error("Error on line {line}: Expected array, got {found}.")]
    ExpectedArray {
        /// The type of the indexed value.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Selected a field of a value that is not a struct.
    #[error("Error on line {line}: Expected struct, got {found}.")]
    ExpectedStruct {
        /// The type of the selected value.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An index that is not an integer.
    #[error("Error on line {line}: Array index must be бүтін, got {found}.")]
    InvalidIndex {
        /// The type of the index.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Index is out of bounds.
    #[error("Error on line {line}: Index {index} is out of bounds for an array of length {len}.")]
    IndexOutOfBounds {
        /// The requested index.
        index: i64,
        /// The array length.
        len:   usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Assigned to something that is not a variable, field or element.
    #[error("Error on line {line}: Invalid assignment target.")]
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An `егер` or `қайтала` condition that is not a boolean.
    #[error("Error on line {line}: Condition must be логикалық, got {found}.")]
    NonBooleanCondition {
        /// The condition's type.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// `тоқта` outside any loop.
    #[error("Error on line {line}: 'тоқта' outside of a loop.")]
    BreakOutsideLoop {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `өткіз` outside any loop.
    #[error("Error on line {line}: 'өткіз' outside of a loop.")]
    ContinueOutsideLoop {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A struct that contains itself, directly or through other structs.
    #[error("Error on line {line}: Struct '{name}' contains itself.")]
    RecursiveStruct {
        /// The name of the struct.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Declared a variable of type `ештеңе`.
    #[error("Error on line {line}: Type ештеңе has no values.")]
    VoidValue {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer overflow.
    #[error("Error on line {line}: Integer overflow in '{op}'.")]
    Overflow {
        /// The operator.
        op:   String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer division or remainder by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Recursion went deeper than the machine allows.
    #[error("Error on line {line}: Call stack exhausted after {depth} nested calls.")]
    CallStackExhausted {
        /// The depth limit.
        depth: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Writing program output failed.
    #[error("Error on line {line}: Cannot write output: {source}")]
    Output {
        /// The underlying I/O error.
        source: std::io::Error,
        /// The source line where the error occurred.
        line:   usize,
    },
}
