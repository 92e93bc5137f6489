//! Module builder: declares parameters, one instantiation and the handle it
//! is returned under, then assembles an immutable [`DeploymentDescriptor`].
//!
//! The builder is the *building* state, the descriptor the *built* state.
//! Errors returned by `declare_*` calls are also remembered by the builder,
//! so a module that ignored one still fails at [`ModuleBuilder::build`].
use soroban_sdk::{Env, Map, Symbol, Vec};

use crate::{
    errors::DeployError,
    validation::{validate_name, validate_override},
    Arg, DeploymentDescriptor, InstantiationRequest, ParamValue, Parameter, ResolvedParameter,
    MAX_CONSTRUCTOR_ARGS, MAX_PARAMETERS,
};

#[derive(Clone)]
struct PendingInstantiation {
    contract_name: Symbol,
    args: Vec<Arg>,
}

/// Building state of a module: collects declarations until `build`.
pub struct ModuleBuilder {
    env: Env,
    module_id: Symbol,
    overrides: Map<Symbol, ParamValue>,
    parameters: Vec<Parameter>,
    defaults: Map<Symbol, ParamValue>,
    instantiation: Option<PendingInstantiation>,
    result_name: Option<Symbol>,
    error: Option<DeployError>,
}

impl ModuleBuilder {
    /// Starts an empty module; `overrides` are consulted on every resolution.
    pub fn new(
        env: &Env,
        module_id: &str,
        overrides: Map<Symbol, ParamValue>,
    ) -> Result<Self, DeployError> {
        validate_name(module_id)?;
        Ok(Self {
            env: env.clone(),
            module_id: Symbol::new(env, module_id),
            overrides,
            parameters: Vec::new(env),
            defaults: Map::new(env),
            instantiation: None,
            result_name: None,
            error: None,
        })
    }

    pub fn module_id(&self) -> &Symbol {
        &self.module_id
    }

    /// Registers a parameter and returns a reference usable as a
    /// constructor argument.
    pub fn declare_parameter(
        &mut self,
        name: &str,
        default: ParamValue,
    ) -> Result<Arg, DeployError> {
        let result = self.try_declare_parameter(name, default);
        self.remember(result)
    }

    fn try_declare_parameter(&mut self, name: &str, default: ParamValue) -> Result<Arg, DeployError> {
        validate_name(name)?;
        let name = Symbol::new(&self.env, name);
        if self.defaults.contains_key(name.clone()) {
            return Err(DeployError::DuplicateParameter);
        }
        if self.parameters.len() >= MAX_PARAMETERS {
            return Err(DeployError::TooManyParameters);
        }

        self.defaults.set(name.clone(), default.clone());
        self.parameters.push_back(Parameter {
            name: name.clone(),
            default,
        });
        Ok(Arg::Param(name))
    }

    /// Override supplied by the orchestrator, else the declared default.
    pub fn resolve_parameter(&self, name: &str) -> Result<ParamValue, DeployError> {
        // Names that fail symbol rules can never have been declared
        if validate_name(name).is_err() {
            return Err(DeployError::UnknownParameter);
        }
        self.resolve(&Symbol::new(&self.env, name))
    }

    fn resolve(&self, name: &Symbol) -> Result<ParamValue, DeployError> {
        let default = self
            .defaults
            .get(name.clone())
            .ok_or(DeployError::UnknownParameter)?;

        match self.overrides.get(name.clone()) {
            Some(value) => {
                validate_override(&default, &value)?;
                Ok(value)
            }
            None => Ok(default),
        }
    }

    /// Records the single instantiation. Arity is checked at submission,
    /// once the contract artifact is known.
    pub fn declare_instantiation(
        &mut self,
        contract_name: &str,
        args: &[Arg],
    ) -> Result<(), DeployError> {
        let result = self.try_declare_instantiation(contract_name, args);
        self.remember(result)
    }

    fn try_declare_instantiation(&mut self, contract_name: &str, args: &[Arg]) -> Result<(), DeployError> {
        if self.instantiation.is_some() {
            return Err(DeployError::DuplicateInstantiation);
        }
        validate_name(contract_name)?;
        if args.len() > MAX_CONSTRUCTOR_ARGS as usize {
            return Err(DeployError::TooManyArguments);
        }

        let mut declared = Vec::new(&self.env);
        for arg in args {
            declared.push_back(arg.clone());
        }
        self.instantiation = Some(PendingInstantiation {
            contract_name: Symbol::new(&self.env, contract_name),
            args: declared,
        });
        Ok(())
    }

    /// Names the handle the deployed instance is returned under.
    pub fn declare_result(&mut self, logical_name: &str) -> Result<(), DeployError> {
        let result = self.try_declare_result(logical_name);
        self.remember(result)
    }

    fn try_declare_result(&mut self, logical_name: &str) -> Result<(), DeployError> {
        if self.result_name.is_some() {
            return Err(DeployError::DuplicateResult);
        }
        validate_name(logical_name)?;
        self.result_name = Some(Symbol::new(&self.env, logical_name));
        Ok(())
    }

    pub fn build(&self) -> Result<DeploymentDescriptor, DeployError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        let pending = self
            .instantiation
            .as_ref()
            .ok_or(DeployError::MissingInstantiation)?;
        let result_name = self.result_name.clone().ok_or(DeployError::MissingResult)?;

        // Resolve each parameter once; every reference reuses that value
        let mut resolved = Map::new(&self.env);
        let mut parameters = Vec::new(&self.env);
        for param in self.parameters.iter() {
            let value = self.resolve(&param.name)?;
            resolved.set(param.name.clone(), value.clone());
            parameters.push_back(ResolvedParameter {
                name: param.name,
                default: param.default,
                value,
            });
        }

        let mut args = Vec::new(&self.env);
        for arg in pending.args.iter() {
            let value = match arg {
                Arg::Param(name) => resolved.get(name).ok_or(DeployError::UnknownParameter)?,
                Arg::Value(value) => value,
            };
            args.push_back(value);
        }

        Ok(DeploymentDescriptor {
            module_id: self.module_id.clone(),
            parameters,
            instantiation: InstantiationRequest {
                contract_name: pending.contract_name.clone(),
                args,
            },
            result_name,
        })
    }

    fn remember<T>(&mut self, result: Result<T, DeployError>) -> Result<T, DeployError> {
        if let Err(err) = &result {
            self.error.get_or_insert(*err);
        }
        result
    }
}

/// Creates a builder, lets `define` declare the module, then builds it.
pub fn build_module<F>(
    env: &Env,
    module_id: &str,
    overrides: Map<Symbol, ParamValue>,
    define: F,
) -> Result<DeploymentDescriptor, DeployError>
where
    F: FnOnce(&mut ModuleBuilder) -> Result<(), DeployError>,
{
    let mut builder = ModuleBuilder::new(env, module_id, overrides)?;
    define(&mut builder)?;
    builder.build()
}
