use soroban_sdk::{contracttype, Address, Env, IntoVal, Map, Symbol, Val, Vec};

/// Scalar type of a parameter or constructor input
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ParamKind {
    Int = 0,
    Amount = 1,
    Duration = 2,
}

/// Typed parameter value. Amounts are fixed-point in the smallest unit,
/// durations are whole seconds.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParamValue {
    Int(i128),
    Amount(i128),
    Duration(u64),
}

impl ParamValue {
    pub fn kind(&self) -> ParamKind {
        match self {
            ParamValue::Int(_) => ParamKind::Int,
            ParamValue::Amount(_) => ParamKind::Amount,
            ParamValue::Duration(_) => ParamKind::Duration,
        }
    }

    /// Host value handed to the contract constructor.
    pub fn to_val(&self, env: &Env) -> Val {
        match self {
            ParamValue::Int(v) | ParamValue::Amount(v) => (*v).into_val(env),
            ParamValue::Duration(secs) => (*secs).into_val(env),
        }
    }
}

/// A declared parameter and its default
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Parameter {
    pub name: Symbol,
    pub default: ParamValue,
}

/// A parameter after override resolution
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedParameter {
    pub name: Symbol,
    pub default: ParamValue,
    pub value: ParamValue,
}

/// Constructor argument as declared: a parameter reference or a literal
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Arg {
    Param(Symbol),
    Value(ParamValue),
}

/// One request to create an instance of `contract_name` with the resolved,
/// positional constructor arguments.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InstantiationRequest {
    pub contract_name: Symbol,
    pub args: Vec<ParamValue>,
}

impl InstantiationRequest {
    pub fn constructor_args(&self, env: &Env) -> Vec<Val> {
        let mut vals = Vec::new(env);
        for arg in self.args.iter() {
            vals.push_back(arg.to_val(env));
        }
        vals
    }
}

/// Built deployment plan, ready for an orchestrator
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeploymentDescriptor {
    pub module_id: Symbol,
    pub parameters: Vec<ResolvedParameter>,
    pub instantiation: InstantiationRequest,
    pub result_name: Symbol,
}

/// Constructor signature known for a contract
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContractArtifact {
    pub name: Symbol,
    pub inputs: Vec<ParamKind>,
}

impl ContractArtifact {
    pub fn arity(&self) -> u32 {
        self.inputs.len()
    }
}

/// Logical handle name -> deployed instance, produced once per module
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeploymentResult {
    pub module_id: Symbol,
    pub instances: Map<Symbol, Address>,
}
