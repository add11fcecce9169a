//! # Pet Client
//!
//! Wraps a `ResourceClient<Pet>`. Adds the owner-scoped listing the customer
//! dashboard needs.
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{CustomerId, Pet, PetCreate, PetId, PetProfile, PetUpdate};
use crate::pet_actor::{PetAction, PetActionResult, PetError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Pet actor.
#[derive(Clone)]
pub struct PetClient {
    inner: ResourceClient<Pet>,
}

impl PetClient {
    pub fn new(inner: ResourceClient<Pet>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Pet> for PetClient {
    type Error = PetError;

    fn inner(&self) -> &ResourceClient<Pet> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        PetError::from(e)
    }
}

impl PetClient {
    /// Adds a pet to a customer's profile. The owner must exist and be active.
    #[instrument(skip(self, profile))]
    pub async fn create_pet(&self, customer_id: CustomerId, profile: PetProfile) -> Result<PetId, PetError> {
        debug!(?profile, "create_pet called");
        self.inner
            .create(PetCreate {
                customer_id,
                profile,
            })
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_pet(&self, id: PetId, update: PetUpdate) -> Result<Pet, PetError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn deactivate(&self, id: PetId) -> Result<(), PetError> {
        debug!("Deactivating pet");
        match self
            .inner
            .perform_action(id, PetAction::Deactivate)
            .await
            .map_err(Self::map_error)?
        {
            PetActionResult::Deactivate(()) => Ok(()),
        }
    }

    /// Active pets owned by `customer_id`, ordered by id.
    #[instrument(skip(self))]
    pub async fn list_for_customer(&self, customer_id: CustomerId) -> Result<Vec<Pet>, PetError> {
        let pets = self.list().await?;
        Ok(pets
            .into_iter()
            .filter(|pet| pet.customer_id == customer_id && pet.is_active)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;

    fn pet(id: u32, owner: u32, active: bool) -> Pet {
        let mut pet = Pet::new(
            PetId(id),
            PetCreate {
                customer_id: CustomerId(owner),
                profile: PetProfile {
                    name: format!("pet {id}"),
                    breed: None,
                    age: None,
                    weight: None,
                    gender: None,
                    allergies: vec![],
                    activity_level: None,
                    body_conditions: None,
                    neutered: false,
                },
            },
        );
        pet.is_active = active;
        pet
    }

    #[tokio::test]
    async fn test_list_for_customer_filters_owner_and_inactive() {
        let mut mock = MockClient::<Pet>::new();
        mock.expect_list()
            .return_ok(vec![pet(1, 1, true), pet(2, 2, true), pet(3, 1, false), pet(4, 1, true)]);
        let client = PetClient::new(mock.client());

        let ids: Vec<_> = client
            .list_for_customer(CustomerId(1))
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![PetId(1), PetId(4)]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_invalid_owner_is_recovered() {
        let mut mock = MockClient::<Pet>::new();
        mock.expect_create().return_err(FrameworkError::EntityError(Box::new(
            PetError::InvalidOwner("customer_5 not found".into()),
        )));
        let client = PetClient::new(mock.client());

        let err = client
            .create_pet(CustomerId(5), pet(0, 5, true).into_profile())
            .await
            .unwrap_err();
        assert_eq!(err, PetError::InvalidOwner("customer_5 not found".into()));
        mock.verify();
    }

    impl Pet {
        fn into_profile(self) -> PetProfile {
            PetProfile {
                name: self.name,
                breed: self.breed,
                age: self.age,
                weight: self.weight,
                gender: self.gender,
                allergies: self.allergies,
                activity_level: self.activity_level,
                body_conditions: self.body_conditions,
                neutered: self.neutered,
            }
        }
    }
}
