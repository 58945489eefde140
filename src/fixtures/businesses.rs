// fixtures/businesses.rs
//
// The directory entries shown on the front page. Two restaurants, two
// services and one shop, each with a stable id.

use crate::web_app::model::{Business, Category};

struct Entry {
    id: u32,
    name: &'static str,
    category: Category,
    location: &'static str,
    rating: f64,
    review_count: u32,
    image: &'static str,
    description: &'static str,
    address: &'static str,
}

const ENTRIES: [Entry; 5] = [
    Entry {
        id: 1,
        name: "Mario's Pizzeria",
        category: Category::Restaurant,
        location: "Downtown",
        rating: 4.5,
        review_count: 128,
        image: "https://images.unsplash.com/photo-1565299624946-b28f40a0ca4b?w=400&h=300&fit=crop",
        description: "Authentic Italian pizza with fresh ingredients and traditional recipes.",
        address: "123 Main St, Downtown",
    },
    Entry {
        id: 2,
        name: "TechFix Solutions",
        category: Category::Service,
        location: "Tech District",
        rating: 4.2,
        review_count: 89,
        image: "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?w=400&h=300&fit=crop",
        description: "Professional computer repair and IT support services.",
        address: "456 Tech Blvd, Tech District",
    },
    Entry {
        id: 3,
        name: "Bloom & Blossom",
        category: Category::Shop,
        location: "Garden Quarter",
        rating: 4.8,
        review_count: 156,
        image: "https://images.unsplash.com/photo-1441986300917-64674bd600d8?w=400&h=300&fit=crop",
        description: "Beautiful flowers and plants for every occasion.",
        address: "789 Flower St, Garden Quarter",
    },
    Entry {
        id: 4,
        name: "The Coffee Corner",
        category: Category::Restaurant,
        location: "Downtown",
        rating: 4.3,
        review_count: 234,
        image: "https://images.unsplash.com/photo-1501339847302-ac426a4a7cbb?w=400&h=300&fit=crop",
        description: "Cozy coffee shop with artisanal brews and homemade pastries.",
        address: "321 Brew Ave, Downtown",
    },
    Entry {
        id: 5,
        name: "StyleCut Salon",
        category: Category::Service,
        location: "Fashion District",
        rating: 4.6,
        review_count: 92,
        image: "https://images.unsplash.com/photo-1560066984-138dadb4c035?w=400&h=300&fit=crop",
        description: "Modern hair salon with experienced stylists and premium products.",
        address: "654 Style St, Fashion District",
    },
];

/// The full sample set, in display order
pub fn sample_businesses() -> Vec<Business> {
    ENTRIES
        .iter()
        .map(|e| Business {
            id: e.id,
            name: e.name.to_string(),
            category: e.category,
            location: e.location.to_string(),
            rating: e.rating,
            review_count: e.review_count,
            image: e.image.to_string(),
            description: e.description.to_string(),
            address: e.address.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<u32> = sample_businesses().iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), ENTRIES.len());
    }

    #[test]
    fn test_ratings_in_range() {
        for b in sample_businesses() {
            assert!((0.0..=5.0).contains(&b.rating), "{} has rating {}", b.name, b.rating);
        }
    }

    #[test]
    fn test_category_mix() {
        let businesses = sample_businesses();
        let count = |c: Category| businesses.iter().filter(|b| b.category == c).count();
        assert_eq!(count(Category::Restaurant), 2);
        assert_eq!(count(Category::Service), 2);
        assert_eq!(count(Category::Shop), 1);
    }
}
