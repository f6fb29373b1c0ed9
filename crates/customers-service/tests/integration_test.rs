use chrono::NaiveDate;
use customers_service::lifecycle::CustomersSystem;
use customers_service::model::{
    Owner, OwnerId, Pet, PetId, PetRequest, PetType, PetTypeId,
};
use customers_service::repository::PetRepository;
use customers_service::resource::{EntityKind, ResourceError};
use customers_service::seed::SeedData;
use resource_actor::ActorClient;

fn clinic_system() -> CustomersSystem {
    CustomersSystem::with_seed(32, SeedData::clinic())
}

fn request(id: u32, name: &str, birth_date: Option<NaiveDate>, type_id: u32) -> PetRequest {
    PetRequest {
        id: PetId(id),
        name: name.to_string(),
        birth_date,
        type_id: PetTypeId(type_id),
    }
}

/// Full end-to-end run against the seeded clinic data.
#[tokio::test]
async fn test_full_pet_lifecycle() {
    let system = clinic_system();
    let resource = system.pet_resource();

    // Register Leo for Peter McTavish
    let birth = NaiveDate::from_ymd_opt(2020, 1, 15);
    let leo = resource
        .create_pet(OwnerId(5), request(0, "Leo", birth, 1))
        .await
        .expect("Failed to create pet");

    assert_eq!(leo.id, Some(PetId(14)));
    assert_eq!(leo.name, "Leo");
    assert_eq!(leo.owner_id, Some(OwnerId(5)));
    assert_eq!(leo.pet_type, Some(PetType::new(PetTypeId(1), "cat")));

    // Rename and retype
    resource
        .update_pet(request(14, "Leonardo", birth, 2))
        .await
        .expect("Failed to update pet");

    let details = resource.find_pet(PetId(14)).await.expect("Pet not found");
    assert_eq!(details.name, "Leonardo");
    assert_eq!(details.owner, "Peter McTavish");
    assert_eq!(details.birth_date, birth);
    assert_eq!(details.pet_type, Some(PetType::new(PetTypeId(2), "dog")));

    drop(resource);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_list_pet_types_in_catalog_order() {
    let system = clinic_system();
    let resource = system.pet_resource();

    let names: Vec<String> = resource
        .list_pet_types()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();

    assert_eq!(names, ["cat", "dog", "lizard", "snake", "bird", "hamster"]);

    drop(resource);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_create_for_unknown_owner_saves_nothing() {
    let system = clinic_system();
    let resource = system.pet_resource();

    let err = resource
        .create_pet(OwnerId(999), request(0, "Ghost", None, 1))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ResourceError::NotFound {
            kind: EntityKind::Owner,
            id: 999
        }
    );
    assert_eq!(err.to_string(), "Owner 999 not found");
    assert_eq!(system.pet_client.find_all().await.unwrap().len(), 13);

    drop(resource);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_create_ignores_request_id() {
    let system = clinic_system();
    let resource = system.pet_resource();

    let pet = resource
        .create_pet(OwnerId(1), request(3, "Copycat", None, 1))
        .await
        .unwrap();

    assert_eq!(pet.id, Some(PetId(14)));
    // Rosy is untouched
    let rosy = system.pet_client.find_by_id(PetId(3)).await.unwrap().unwrap();
    assert_eq!(rosy.name, "Rosy");

    drop(resource);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_overwrites_fields_and_keeps_owner() {
    let system = clinic_system();
    let resource = system.pet_resource();

    resource
        .update_pet(request(6, "Georgie", None, 5))
        .await
        .unwrap();

    let pet = system.pet_client.find_by_id(PetId(6)).await.unwrap().unwrap();
    assert_eq!(pet.name, "Georgie");
    assert_eq!(pet.birth_date, None);
    assert_eq!(pet.pet_type, Some(PetType::new(PetTypeId(5), "bird")));
    assert_eq!(pet.owner_id, Some(OwnerId(5)));
    assert_eq!(system.pet_client.find_all().await.unwrap().len(), 13);

    drop(resource);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_with_unknown_type_keeps_current_type() {
    let system = clinic_system();
    let resource = system.pet_resource();

    // Iggy is a lizard
    resource
        .update_pet(request(5, "Iggy", NaiveDate::from_ymd_opt(2010, 11, 30), 99))
        .await
        .unwrap();

    let details = resource.find_pet(PetId(5)).await.unwrap();
    assert_eq!(details.pet_type, Some(PetType::new(PetTypeId(3), "lizard")));

    drop(resource);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_and_find_missing_pet() {
    let system = clinic_system();
    let resource = system.pet_resource();

    let err = resource
        .update_pet(request(0, "Nobody", None, 1))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Pet 0 not found");

    let err = resource.find_pet(PetId(77)).await.unwrap_err();
    assert_eq!(err, ResourceError::pet_not_found(PetId(77)));

    drop(resource);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_find_pet_with_dangling_owner() {
    let mut seed = SeedData::clinic();
    seed.pets.push(Pet {
        id: Some(PetId(50)),
        name: "Stray".to_string(),
        owner_id: Some(OwnerId(42)),
        ..Pet::default()
    });
    let system = CustomersSystem::with_seed(8, seed);
    let resource = system.pet_resource();

    let err = resource.find_pet(PetId(50)).await.unwrap_err();
    assert_eq!(err.to_string(), "Owner 42 not found");

    drop(resource);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_find_pet_without_owner_has_empty_owner_name() {
    let seed = SeedData {
        pets: vec![Pet::new("Patch", None, PetType::new(PetTypeId(1), "cat"))],
        ..SeedData::default()
    };
    let system = CustomersSystem::with_seed(8, seed);
    let resource = system.pet_resource();

    let details = resource.find_pet(PetId(1)).await.unwrap();
    assert_eq!(details.owner, "");
    assert_eq!(details.name, "Patch");

    drop(resource);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_new_owner_can_register_pets() {
    let system = CustomersSystem::with_seed(8, SeedData::clinic());
    let resource = system.pet_resource();

    let owner = system
        .owner_client
        .save(Owner::new("Ada", "Lovelace", "1 Analytical Way", "London", "5550100"))
        .await
        .unwrap();
    assert_eq!(owner.id, Some(OwnerId(11)));

    let pet = resource
        .create_pet(OwnerId(11), request(0, "Babbage", None, 2))
        .await
        .unwrap();
    let details = resource.find_pet(pet.id.unwrap()).await.unwrap();
    assert_eq!(details.owner, "Ada Lovelace");

    drop(resource);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_create_pet_with_unknown_type_has_no_type() {
    let system = clinic_system();
    let resource = system.pet_resource();

    let pet = resource
        .create_pet(OwnerId(5), request(0, "Leo", None, 99))
        .await
        .unwrap();
    assert_eq!(pet.pet_type, None);

    let details = resource.find_pet(pet.id.unwrap()).await.unwrap();
    assert_eq!(details.pet_type, None);

    drop(resource);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_list_pet_types_without_seed_data() {
    let system = CustomersSystem::with_seed(8, SeedData::default());
    let resource = system.pet_resource();

    assert!(resource.list_pet_types().await.unwrap().is_empty());

    drop(resource);
    system.shutdown().await.unwrap();
}
