//! Sample clinic data: the pet-type catalog plus ten owners and their pets.

use crate::model::{Owner, OwnerId, Pet, PetId, PetType, PetTypeId};
use chrono::NaiveDate;

/// Initial contents for the three stores.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub pet_types: Vec<PetType>,
    pub owners: Vec<Owner>,
    pub pets: Vec<Pet>,
}

const PET_TYPES: [&str; 6] = ["cat", "dog", "lizard", "snake", "bird", "hamster"];

const OWNERS: [(&str, &str, &str, &str, &str); 10] = [
    ("George", "Franklin", "110 W. Liberty St.", "Madison", "6085551023"),
    ("Betty", "Davis", "638 Cardinal Ave.", "Sun Prairie", "6085551749"),
    ("Eduardo", "Rodriquez", "2693 Commerce St.", "McFarland", "6085558763"),
    ("Harold", "Davis", "563 Friendly St.", "Windsor", "6085553198"),
    ("Peter", "McTavish", "2387 S. Fair Way", "Madison", "6085552765"),
    ("Jean", "Coleman", "105 N. Lake St.", "Monona", "6085552654"),
    ("Jeff", "Black", "1450 Oak Blvd.", "Monona", "6085555387"),
    ("Maria", "Escobito", "345 Maple St.", "Madison", "6085557683"),
    ("David", "Schroeder", "2749 Blackhawk Trail", "Madison", "6085559435"),
    ("Carlos", "Estaban", "2335 Independence La.", "Waunakee", "6085555487"),
];

// (name, birth date, type id, owner id)
const PETS: [(&str, (i32, u32, u32), u32, u32); 13] = [
    ("Leo", (2010, 9, 7), 1, 1),
    ("Basil", (2012, 8, 6), 6, 2),
    ("Rosy", (2011, 4, 17), 2, 3),
    ("Jewel", (2010, 3, 7), 2, 3),
    ("Iggy", (2010, 11, 30), 3, 4),
    ("George", (2010, 1, 20), 4, 5),
    ("Samantha", (2012, 9, 4), 1, 6),
    ("Max", (2012, 9, 4), 1, 6),
    ("Lucky", (2011, 8, 6), 5, 7),
    ("Mulligan", (2007, 2, 24), 2, 8),
    ("Freddy", (2010, 3, 9), 5, 9),
    ("Lucky", (2010, 6, 24), 2, 10),
    ("Sly", (2012, 6, 8), 1, 10),
];

impl SeedData {
    /// The classic clinic sample set, with ids numbered from 1 in listing order.
    pub fn clinic() -> Self {
        let pet_types: Vec<PetType> = (1..)
            .zip(PET_TYPES)
            .map(|(id, name)| PetType::new(PetTypeId(id), name))
            .collect();

        let owners: Vec<Owner> = (1..)
            .zip(OWNERS)
            .map(|(id, (first, last, address, city, telephone))| {
                Owner::new(first, last, address, city, telephone).with_id(OwnerId(id))
            })
            .collect();

        let pets = (1..)
            .zip(PETS)
            .map(|(id, (name, (y, m, d), type_id, owner_id))| Pet {
                id: Some(PetId(id)),
                name: name.to_string(),
                birth_date: NaiveDate::from_ymd_opt(y, m, d),
                pet_type: pet_types.get(type_id as usize - 1).cloned(),
                owner_id: Some(OwnerId(owner_id)),
            })
            .collect();

        Self {
            pet_types,
            owners,
            pets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clinic_pets_reference_seeded_records() {
        let seed = SeedData::clinic();

        assert_eq!(seed.pet_types.len(), 6);
        assert_eq!(seed.owners.len(), 10);
        assert_eq!(seed.pets.len(), 13);

        for pet in &seed.pets {
            assert!(pet.birth_date.is_some(), "{} has no birth date", pet.name);
            assert!(pet.pet_type.is_some(), "{} has no type", pet.name);
            let owner_id = pet.owner_id.unwrap();
            assert!(seed.owners.iter().any(|o| o.id == Some(owner_id)));
        }
    }

    #[test]
    fn test_clinic_ids_follow_listing_order() {
        let seed = SeedData::clinic();

        assert_eq!(seed.pet_types[0], PetType::new(PetTypeId(1), "cat"));
        assert_eq!(seed.owners[4].display_name(), "Peter McTavish");
        assert_eq!(seed.owners[4].id, Some(OwnerId(5)));
        assert_eq!(seed.pets[5].name, "George");
        assert_eq!(seed.pets[5].owner_id, Some(OwnerId(5)));
    }
}
