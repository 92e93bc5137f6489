use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum DeployError {
    // Declaration and build
    DuplicateParameter = 1,
    UnknownParameter = 2,
    ParameterTypeMismatch = 3,
    InvalidName = 4,
    TooManyParameters = 5,
    TooManyArguments = 6,
    DuplicateInstantiation = 7,
    MissingInstantiation = 8,
    MissingResult = 9,
    AmountOverflow = 10,
    DuplicateResult = 11,

    // Submission
    ArityMismatch = 20,
    ArgumentTypeMismatch = 21,
    UnknownContract = 22,
    SubmissionFailed = 23,

    // Result registry
    NotInitialized = 30,
    AlreadyInitialized = 31,
    Unauthorized = 32,
    ResultAlreadyRecorded = 33,
    UnknownResult = 34,
}
