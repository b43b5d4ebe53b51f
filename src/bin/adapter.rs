// Adapter pattern: two incompatible animal types behind one common trait.

use colored::Colorize;

// ============================================================================
// Step 1: Target trait (what the client expects)
// ============================================================================

trait Animal {
    fn make_sound(&self) -> String;
}

// ============================================================================
// Step 2: Adaptees (existing types with incompatible interfaces)
// ============================================================================

struct Dog;

impl Dog {
    fn bark(&self) -> String {
        "Woof!".to_string()
    }
}

struct Cat;

impl Cat {
    fn meow(&self) -> String {
        "Meow!".to_string()
    }
}

// ============================================================================
// Step 3: Adapters (bridge the gap via composition)
// ============================================================================

struct DogAdapter {
    dog: Dog,
}

impl DogAdapter {
    fn new(dog: Dog) -> Self {
        Self { dog }
    }
}

impl Animal for DogAdapter {
    fn make_sound(&self) -> String {
        // Translate the client's request to the adaptee's own method
        self.dog.bark()
    }
}

struct CatAdapter {
    cat: Cat,
}

impl CatAdapter {
    fn new(cat: Cat) -> Self {
        Self { cat }
    }
}

impl Animal for CatAdapter {
    fn make_sound(&self) -> String {
        self.cat.meow()
    }
}

// ============================================================================
// Step 4: Client code (works with the target trait only)
// ============================================================================

fn describe(animal: &dyn Animal) {
    println!("The animal says: {}", animal.make_sound());
}

fn main() {
    let dog = Dog;
    let cat = Cat;

    // Dog and Cat lack make_sound(), so describe() can't take them directly.
    let dog_adapter = DogAdapter::new(dog);
    let cat_adapter = CatAdapter::new(cat);

    println!("{}", "=== Using adapters ===".bold());
    describe(&dog_adapter);
    describe(&cat_adapter);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adaptee_sounds() {
        assert_eq!(Dog.bark(), "Woof!");
        assert_eq!(Cat.meow(), "Meow!");
    }

    #[test]
    fn test_dog_adapter_translates_bark() {
        let adapter = DogAdapter::new(Dog);
        assert_eq!(adapter.make_sound(), "Woof!");
    }

    #[test]
    fn test_cat_adapter_translates_meow() {
        let adapter = CatAdapter::new(Cat);
        assert_eq!(adapter.make_sound(), "Meow!");
    }

    #[test]
    fn test_heterogeneous_collection() {
        let animals: Vec<Box<dyn Animal>> = vec![
            Box::new(DogAdapter::new(Dog)),
            Box::new(CatAdapter::new(Cat)),
        ];
        let sounds: Vec<String> = animals.iter().map(|a| a.make_sound()).collect();
        assert_eq!(sounds, vec!["Woof!", "Meow!"]);
    }
}
