use soroban_sdk::{Address, Env, Map, Symbol};

use crate::{
    errors::DeployError, validation::validate_constructor_args, ContractArtifact,
    DeploymentDescriptor, DeploymentResult, InstantiationRequest,
};

/// Looks up the constructor signature of a named contract
pub trait ArtifactResolver {
    fn resolve(&self, contract_name: &Symbol) -> Option<ContractArtifact>;
}

impl ArtifactResolver for Map<Symbol, ContractArtifact> {
    fn resolve(&self, contract_name: &Symbol) -> Option<ContractArtifact> {
        self.get(contract_name.clone())
    }
}

/// Creates the contract instance. Errors are returned to the caller as is.
pub trait Submitter {
    fn submit(
        &mut self,
        env: &Env,
        request: &InstantiationRequest,
        artifact: &ContractArtifact,
    ) -> Result<Address, DeployError>;
}

impl<F> Submitter for F
where
    F: FnMut(&Env, &InstantiationRequest) -> Result<Address, DeployError>,
{
    fn submit(
        &mut self,
        env: &Env,
        request: &InstantiationRequest,
        _artifact: &ContractArtifact,
    ) -> Result<Address, DeployError> {
        self(env, request)
    }
}

/// Validates the descriptor's instantiation against its artifact, submits it
/// once and returns the handle mapping. Nothing is returned on failure.
pub fn deploy<R, S>(
    env: &Env,
    descriptor: &DeploymentDescriptor,
    resolver: &R,
    submitter: &mut S,
) -> Result<DeploymentResult, DeployError>
where
    R: ArtifactResolver + ?Sized,
    S: Submitter + ?Sized,
{
    let request = &descriptor.instantiation;
    let artifact = resolver
        .resolve(&request.contract_name)
        .ok_or(DeployError::UnknownContract)?;
    validate_constructor_args(&artifact.inputs, &request.args)?;

    let address = submitter.submit(env, request, &artifact)?;

    let mut instances = Map::new(env);
    instances.set(descriptor.result_name.clone(), address);
    Ok(DeploymentResult {
        module_id: descriptor.module_id.clone(),
        instances,
    })
}
