//! services/backend/src/adapters/seed.rs
//!
//! The fixed demonstration dataset the store falls back to when a collection
//! has never been written: eighteen listings across six Indian metros, the
//! demo accounts, and the starting dashboard numbers.

use chrono::{DateTime, TimeZone, Utc};
use rentflow_core::domain::{
    GeoPoint, MonthlyRevenue, Property, PropertyCategory, PropertyStatus, Stats, UserRole,
};

/// Every demo account signs in with this password.
pub const DEMO_PASSWORD: &str = "password";

// Curated high-quality architectural images.
const IMAGE_POOL: [&str; 15] = [
    "https://images.unsplash.com/photo-1600596542815-2a4d9f0152ba?q=80&w=800", // Modern Living Room
    "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?q=80&w=800", // Luxury Villa Exterior
    "https://images.unsplash.com/photo-1600566753190-17f0baa2a6c3?q=80&w=800", // Modern Kitchen
    "https://images.unsplash.com/photo-1600210492486-724fe5c67fb0?q=80&w=800", // Minimalist Bedroom
    "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?q=80&w=800", // Modern Apartment Building
    "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?q=80&w=800", // Balcony View
    "https://images.unsplash.com/photo-1600607687644-c7171b42498b?q=80&w=800", // Glass Facade
    "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?q=80&w=800", // Cozy Apartment
    "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688?q=80&w=800", // Loft Style
    "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?q=80&w=800",   // Real Estate Interior
    "https://images.unsplash.com/photo-1560185007-cde436f6a4d0?q=80&w=800",   // Blue tone living
    "https://images.unsplash.com/photo-1554995207-c18c203602cb?q=80&w=800",   // Warm interior
    "https://images.unsplash.com/photo-1560185127-6ed189bf02f4?q=80&w=800",   // Clean bathroom
    "https://images.unsplash.com/photo-1560448205-4d9b3e6bb6db?q=80&w=800",   // Hallway
    "https://images.unsplash.com/photo-1515263487990-61b07816b324?q=80&w=800", // Building Low angle
];

/// A demo account before hashing; the store turns these into stored records
/// on first seed.
#[derive(Debug, Clone)]
pub struct SeedUser {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub role: UserRole,
    pub avatar: String,
}

fn demo_account(id: &'static str, name: &'static str, email: &'static str, role: UserRole) -> SeedUser {
    SeedUser {
        id,
        name,
        email,
        role,
        avatar: format!("https://ui-avatars.com/api/?name={}", name.replace(' ', "+")),
    }
}

pub fn seed_users() -> Vec<SeedUser> {
    vec![
        demo_account("owner1", "Rajesh Kumar", "owner@rentflow.com", UserRole::Owner),
        demo_account("owner2", "Amit Shah", "amit@rentflow.com", UserRole::Owner),
        demo_account("owner3", "Sneha Reddy", "sneha@rentflow.com", UserRole::Owner),
        demo_account("owner4", "Vikram Singh", "vikram@rentflow.com", UserRole::Owner),
        demo_account("owner5", "Priya Menon", "priya@rentflow.com", UserRole::Owner),
        demo_account("owner6", "Arun Das", "arun@rentflow.com", UserRole::Owner),
        demo_account("tenant1", "Anjali Sharma", "tenant@rentflow.com", UserRole::Tenant),
    ]
}

pub fn seed_stats() -> Stats {
    Stats {
        total_revenue: 2_450_000,
        occupancy_rate: 92,
        active_inquiries: 12,
        // Starts in step with the seeded listings below.
        total_properties: seed_properties().len() as u32,
        monthly_revenue_data: vec![
            month("Jan", 180_000),
            month("Feb", 210_000),
            month("Mar", 250_000),
            month("Apr", 240_000),
            month("May", 280_000),
            month("Jun", 350_000),
        ],
    }
}

fn month(name: &str, value: i64) -> MonthlyRevenue {
    MonthlyRevenue {
        name: name.to_string(),
        value,
    }
}

fn posted(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    // Utc has no folds or gaps, so a literal date always resolves.
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

fn images(indices: &[usize]) -> Vec<String> {
    indices.iter().map(|&i| IMAGE_POOL[i].to_string()).collect()
}

fn amenities(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Listing data derived from the market CSV. Coordinates are jittered away
/// from the city centers so map markers do not overlap.
pub fn seed_properties() -> Vec<Property> {
    vec![
        // --- MUMBAI ---
        Property {
            id: "m1".to_string(),
            owner_id: "owner1".to_string(),
            title: "Ultra-Luxe 4BHK at Trump Tower".to_string(),
            description: "Experience the pinnacle of luxury living in Worli. This semi-furnished 4BHK in Trump Tower offers breathtaking sea views, world-class amenities, and high-end security.".to_string(),
            address: "Trump Tower, Worli, Mumbai".to_string(),
            price: 300_000,
            bedrooms: 4,
            bathrooms: 5,
            sqft: 1600,
            images: images(&[1, 0, 5]),
            amenities: amenities(&["Sea View", "Concierge", "Gym", "Pool", "Semi-Furnished"]),
            status: PropertyStatus::Available,
            rating: 5.0,
            category: PropertyCategory::Villa,
            is_featured: true,
            posted_date: posted(2022, 7, 7),
            location: Some(GeoPoint { lat: 19.0892, lng: 72.8656 }),
        },
        Property {
            id: "m2".to_string(),
            owner_id: "owner2".to_string(),
            title: "Chic 2BHK in Santacruz West".to_string(),
            description: "A beautifully furnished 2BHK apartment in the heart of Santacruz West. High floor with great ventilation. Perfect for families or working professionals.".to_string(),
            address: "Santacruz West, Mumbai".to_string(),
            price: 70_000,
            bedrooms: 2,
            bathrooms: 2,
            sqft: 750,
            images: images(&[7, 2]),
            amenities: amenities(&["Furnished", "Lift", "Security", "Water Supply"]),
            status: PropertyStatus::Available,
            rating: 4.8,
            category: PropertyCategory::Apartment,
            is_featured: false,
            posted_date: posted(2022, 6, 14),
            location: Some(GeoPoint { lat: 19.0631, lng: 72.8903 }),
        },
        Property {
            id: "m3".to_string(),
            owner_id: "owner1".to_string(),
            title: "Spacious 3BHK in Chembur".to_string(),
            description: "Unfurnished 3BHK in Sabari Palm View. Large carpet area, ideal for families looking to design their own space. Close to monorail.".to_string(),
            address: "Sabari Palm View, Chembur, Mumbai".to_string(),
            price: 75_000,
            bedrooms: 3,
            bathrooms: 3,
            sqft: 1100,
            images: images(&[4, 13]),
            amenities: amenities(&["Unfurnished", "Parking", "Gated Community"]),
            status: PropertyStatus::Available,
            rating: 4.5,
            category: PropertyCategory::Apartment,
            is_featured: false,
            posted_date: posted(2022, 5, 27),
            location: Some(GeoPoint { lat: 19.0577, lng: 72.8745 }),
        },
        Property {
            id: "m4".to_string(),
            owner_id: "owner1".to_string(),
            title: "Cozy 1BHK Studio in Andheri West".to_string(),
            description: "Semi-furnished 1BHK in Shaheen Apartment. Excellent connectivity to Versova Metro and Juhu Beach.".to_string(),
            address: "Shaheen Apartment, Andheri West, Mumbai".to_string(),
            price: 25_000,
            bedrooms: 1,
            bathrooms: 1,
            sqft: 320,
            images: images(&[8, 3]),
            amenities: amenities(&["Semi-Furnished", "Metro Access", "Market Nearby"]),
            status: PropertyStatus::Available,
            rating: 4.2,
            category: PropertyCategory::Apartment,
            is_featured: false,
            posted_date: posted(2022, 5, 16),
            location: Some(GeoPoint { lat: 19.0948, lng: 72.8612 }),
        },
        // --- BANGALORE ---
        Property {
            id: "b1".to_string(),
            owner_id: "owner3".to_string(),
            title: "Grand 3BHK Villa in Talagatta Pura".to_string(),
            description: "Expansive 3BHK home with 3354 sqft of living space. Furnished interiors with a touch of elegance. Located in a serene neighborhood.".to_string(),
            address: "Talagatta Pura, Bangalore".to_string(),
            price: 70_000,
            bedrooms: 3,
            bathrooms: 3,
            sqft: 3354,
            images: images(&[1, 6]),
            amenities: amenities(&["Furnished", "Garden", "Power Backup", "3 Balconies"]),
            status: PropertyStatus::Available,
            rating: 4.9,
            category: PropertyCategory::House,
            is_featured: true,
            posted_date: posted(2022, 6, 30),
            location: Some(GeoPoint { lat: 12.9580, lng: 77.6101 }),
        },
        Property {
            id: "b2".to_string(),
            owner_id: "owner3".to_string(),
            title: "Modern 4BHK in Malleshwaram".to_string(),
            description: "Semi-furnished 4BHK apartment in the cultural hub of Bangalore. Close to IISc and Sankey Tank. Premium fittings.".to_string(),
            address: "Malleshwaram, Bangalore".to_string(),
            price: 61_500,
            bedrooms: 4,
            bathrooms: 3,
            sqft: 2608,
            images: images(&[5, 0]),
            amenities: amenities(&["Semi-Furnished", "Lift", "Security", "Central Location"]),
            status: PropertyStatus::Available,
            rating: 4.7,
            category: PropertyCategory::Apartment,
            is_featured: false,
            posted_date: posted(2022, 7, 9),
            location: Some(GeoPoint { lat: 12.9873, lng: 77.5722 }),
        },
        Property {
            id: "b3".to_string(),
            owner_id: "owner4".to_string(),
            title: "Affordable 2BHK in Dooravani Nagar".to_string(),
            description: "Budget-friendly semi-furnished apartment. Good ventilation and water supply. Ideal for small families.".to_string(),
            address: "Nagappa Reddy layout-Dooravani Nagar, Bangalore".to_string(),
            price: 10_500,
            bedrooms: 2,
            bathrooms: 2,
            sqft: 800,
            images: images(&[7]),
            amenities: amenities(&["Semi-Furnished", "Water Supply", "Two Wheeler Parking"]),
            status: PropertyStatus::Available,
            rating: 4.0,
            category: PropertyCategory::Apartment,
            is_featured: false,
            posted_date: posted(2022, 6, 23),
            location: Some(GeoPoint { lat: 12.9642, lng: 77.6040 }),
        },
        // --- DELHI ---
        Property {
            id: "d1".to_string(),
            owner_id: "owner2".to_string(),
            title: "Stylish 3BHK in South Extension".to_string(),
            description: "Semi-furnished 3BHK floor in South Ext 1. High-end neighborhood with access to premium markets and metro.".to_string(),
            address: "South Extension 1, Delhi".to_string(),
            price: 80_000,
            bedrooms: 3,
            bathrooms: 3,
            sqft: 1800,
            images: images(&[0, 2, 13]),
            amenities: amenities(&["Semi-Furnished", "Metro", "Park Facing", "Gated"]),
            status: PropertyStatus::Available,
            rating: 4.8,
            category: PropertyCategory::House,
            is_featured: true,
            posted_date: posted(2022, 6, 26),
            location: Some(GeoPoint { lat: 28.6902, lng: 77.1183 }),
        },
        Property {
            id: "d2".to_string(),
            owner_id: "owner2".to_string(),
            title: "1BHK Studio in Hauz Khas".to_string(),
            description: "Artist-friendly furnished studio in Hauz Khas. Walkable distance to Deer Park and Hauz Khas Village nightlife.".to_string(),
            address: "Hauz Khas, Delhi".to_string(),
            price: 20_000,
            bedrooms: 1,
            bathrooms: 1,
            sqft: 200,
            images: images(&[8]),
            amenities: amenities(&["Furnished", "Roof Access", "Trendy Area"]),
            status: PropertyStatus::Available,
            rating: 4.3,
            category: PropertyCategory::Apartment,
            is_featured: false,
            posted_date: posted(2022, 6, 30),
            location: Some(GeoPoint { lat: 28.7159, lng: 77.0888 }),
        },
        Property {
            id: "d3".to_string(),
            owner_id: "owner2".to_string(),
            title: "2BHK Builder Floor in Keshav Puram".to_string(),
            description: "Independent floor with semi-furnished interiors. Safe neighborhood near Tri Nagar. Suitable for families.".to_string(),
            address: "Keshav Puram, Tri Nagar, Delhi".to_string(),
            price: 14_000,
            bedrooms: 2,
            bathrooms: 2,
            sqft: 800,
            images: images(&[9, 11]),
            amenities: amenities(&["Semi-Furnished", "Independent Floor", "Water Tank"]),
            status: PropertyStatus::Available,
            rating: 3.9,
            category: PropertyCategory::House,
            is_featured: false,
            posted_date: posted(2022, 6, 24),
            location: Some(GeoPoint { lat: 28.7230, lng: 77.1121 }),
        },
        // --- HYDERABAD ---
        Property {
            id: "h1".to_string(),
            owner_id: "owner5".to_string(),
            title: "Palatial 4BHK in Jubilee Hills".to_string(),
            description: "Prestigious address in Jubilee Hills. Expansive 4500 sqft residence with semi-furnished interiors. Home to the elite.".to_string(),
            address: "Jubilee Hills, Hyderabad".to_string(),
            price: 250_000,
            bedrooms: 4,
            bathrooms: 4,
            sqft: 4500,
            images: images(&[1, 5, 12]),
            amenities: amenities(&["Semi-Furnished", "Private Garden", "Servant Quarters", "3 Car Parking"]),
            status: PropertyStatus::Available,
            rating: 5.0,
            category: PropertyCategory::Villa,
            is_featured: true,
            posted_date: posted(2022, 6, 30),
            location: Some(GeoPoint { lat: 17.3988, lng: 78.4719 }),
        },
        Property {
            id: "h2".to_string(),
            owner_id: "owner5".to_string(),
            title: "4BHK Apartment in Financial District".to_string(),
            description: "Modern apartment in Nanakram Guda. Close to Gachibowli IT corridor. Ideal for corporate leasing.".to_string(),
            address: "Financial District, Nanakram Guda, Hyderabad".to_string(),
            price: 75_000,
            bedrooms: 4,
            bathrooms: 4,
            sqft: 3800,
            images: images(&[14, 6]),
            amenities: amenities(&["Semi-Furnished", "Clubhouse", "Gym", "Swimming Pool"]),
            status: PropertyStatus::Available,
            rating: 4.7,
            category: PropertyCategory::Apartment,
            is_featured: false,
            posted_date: posted(2022, 6, 28),
            location: Some(GeoPoint { lat: 17.3731, lng: 78.5002 }),
        },
        // --- CHENNAI ---
        Property {
            id: "c1".to_string(),
            owner_id: "owner6".to_string(),
            title: "Luxury 3BHK at Boat Club Road".to_string(),
            description: "Rare opportunity to rent in Boat Club Road. 3000 sqft of pure luxury. Furnished with antique furniture and modern fittings.".to_string(),
            address: "Madras Boat Club Road, Chennai".to_string(),
            price: 200_000,
            bedrooms: 3,
            bathrooms: 4,
            sqft: 3000,
            images: images(&[0, 10]),
            amenities: amenities(&["Furnished", "Leafy Neighborhood", "High Security", "Power Backup"]),
            status: PropertyStatus::Available,
            rating: 5.0,
            category: PropertyCategory::House,
            is_featured: true,
            posted_date: posted(2022, 7, 10),
            location: Some(GeoPoint { lat: 13.0691, lng: 80.2855 }),
        },
        Property {
            id: "c2".to_string(),
            owner_id: "owner6".to_string(),
            title: "3BHK Flat in R.A Puram".to_string(),
            description: "Semi-furnished apartment in Mandaiveli. Excellent schools and shopping nearby. Spacious and well-lit.".to_string(),
            address: "R.A Puram, Mandaiveli, Chennai".to_string(),
            price: 90_000,
            bedrooms: 3,
            bathrooms: 3,
            sqft: 2400,
            images: images(&[4, 11]),
            amenities: amenities(&["Semi-Furnished", "Lift", "Covered Parking"]),
            status: PropertyStatus::Available,
            rating: 4.6,
            category: PropertyCategory::Apartment,
            is_featured: false,
            posted_date: posted(2022, 5, 20),
            location: Some(GeoPoint { lat: 13.0940, lng: 80.2566 }),
        },
        Property {
            id: "c3".to_string(),
            owner_id: "owner6".to_string(),
            title: "2BHK in Medavakkam".to_string(),
            description: "Affordable semi-furnished apartment in a gated community. Close to Sholinganallur ELCOT SEZ.".to_string(),
            address: "Medavakkam, Chennai".to_string(),
            price: 15_000,
            bedrooms: 2,
            bathrooms: 2,
            sqft: 1100,
            images: images(&[13]),
            amenities: amenities(&["Semi-Furnished", "Park", "Security"]),
            status: PropertyStatus::Available,
            rating: 4.1,
            category: PropertyCategory::Apartment,
            is_featured: false,
            posted_date: posted(2022, 7, 6),
            location: Some(GeoPoint { lat: 13.0758, lng: 80.2821 }),
        },
        // --- KOLKATA ---
        Property {
            id: "k1".to_string(),
            owner_id: "owner4".to_string(),
            title: "3BHK in New Town Action Area 1".to_string(),
            description: "Modern apartment in Rajarhat Newtown. Close to IT hubs and Eco Park. Semi-furnished with modular kitchen.".to_string(),
            address: "Action Area 1, Rajarhat Newtown, Kolkata".to_string(),
            price: 25_000,
            bedrooms: 3,
            bathrooms: 2,
            sqft: 1200,
            images: images(&[14, 2]),
            amenities: amenities(&["Semi-Furnished", "Lift", "Parking", "Gym"]),
            status: PropertyStatus::Available,
            rating: 4.3,
            category: PropertyCategory::Apartment,
            is_featured: true,
            posted_date: posted(2022, 5, 23),
            location: Some(GeoPoint { lat: 22.5871, lng: 88.3512 }),
        },
        Property {
            id: "k2".to_string(),
            owner_id: "owner4".to_string(),
            title: "2BHK in Salt Lake Sector 2".to_string(),
            description: "Peaceful residential block in Salt Lake. Semi-furnished 2BHK with balcony overlooking the park.".to_string(),
            address: "Salt Lake City Sector 2, Kolkata".to_string(),
            price: 17_000,
            bedrooms: 2,
            bathrooms: 1,
            sqft: 1000,
            images: images(&[7]),
            amenities: amenities(&["Semi-Furnished", "Park Facing", "24h Water"]),
            status: PropertyStatus::Available,
            rating: 4.2,
            category: PropertyCategory::Apartment,
            is_featured: false,
            posted_date: posted(2022, 5, 16),
            location: Some(GeoPoint { lat: 22.5609, lng: 88.3766 }),
        },
        Property {
            id: "k3".to_string(),
            owner_id: "owner4".to_string(),
            title: "Budget 2BHK in Bandel".to_string(),
            description: "Unfurnished ground floor apartment in Bandel. Very close to station. Ideal for commuters.".to_string(),
            address: "Bandel, Kolkata".to_string(),
            price: 10_000,
            bedrooms: 2,
            bathrooms: 2,
            sqft: 1100,
            images: images(&[8]),
            amenities: amenities(&["Unfurnished", "Ground Floor", "Near Station"]),
            status: PropertyStatus::Available,
            rating: 3.8,
            category: PropertyCategory::Apartment,
            is_featured: false,
            posted_date: posted(2022, 5, 18),
            location: Some(GeoPoint { lat: 22.5785, lng: 88.3494 }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_counter_matches_the_seeded_listings() {
        assert_eq!(seed_stats().total_properties, seed_properties().len() as u32);
    }

    #[test]
    fn seeded_owners_exist_in_the_demo_accounts() {
        let users = seed_users();
        for property in seed_properties() {
            assert!(
                users.iter().any(|u| u.id == property.owner_id),
                "listing {} references unknown owner {}",
                property.id,
                property.owner_id
            );
        }
    }
}
