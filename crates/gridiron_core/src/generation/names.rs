//! Name pool for generated players. Cosmetic only.

use rand::seq::SliceRandom;
use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "Aaron", "Andre", "Anthony", "Brandon", "Caleb", "Cameron", "Chris", "Darius", "David",
    "DeShawn", "Devin", "Elijah", "Isaiah", "Jalen", "James", "Jamal", "Jared", "Jaylen",
    "Jordan", "Josh", "Justin", "Kenny", "Kevin", "Lamar", "Malik", "Marcus", "Michael",
    "Mike", "Nathan", "Patrick", "Quincy", "Rashad", "Ray", "Ryan", "Terrell", "Tony",
    "Travis", "Trey", "Tyler", "Xavier",
];

const LAST_NAMES: &[&str] = &[
    "Adams", "Allen", "Anderson", "Baker", "Banks", "Bell", "Brooks", "Brown", "Bryant",
    "Butler", "Carter", "Coleman", "Cooper", "Davis", "Edwards", "Evans", "Foster", "Gibson",
    "Grant", "Green", "Harris", "Henderson", "Hill", "Jackson", "James", "Jenkins", "Johnson",
    "Jones", "Lewis", "Mitchell", "Moore", "Parker", "Robinson", "Sanders", "Simmons", "Smith",
    "Taylor", "Thomas", "Washington", "Williams",
];

pub fn random_name<R: Rng + ?Sized>(rng: &mut R) -> (String, String) {
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or("John");
    let last = LAST_NAMES.choose(rng).copied().unwrap_or("Doe");
    (first.to_string(), last.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_names_come_from_pool() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..50 {
            let (first, last) = random_name(&mut rng);
            assert!(FIRST_NAMES.contains(&first.as_str()));
            assert!(LAST_NAMES.contains(&last.as_str()));
        }
    }
}
