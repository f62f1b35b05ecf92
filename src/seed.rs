//! Startup content for Les Embruns.

use crate::models::{
    AboutSection, ContactInfo, GalleryItem, HeroSection, MenuCategory, MenuItem, OpeningHours,
    RestaurantInfo,
};

const SERVICE_HOURS: &str = "12h15-13h30, 19h15-21h15";

fn item(name: &str, description: &str, price: &str) -> MenuItem {
    MenuItem {
        name: name.to_string(),
        description: description.to_string(),
        price: price.to_string(),
    }
}

pub fn restaurant_info() -> RestaurantInfo {
    RestaurantInfo {
        name: "Les Embruns".to_string(),
        tagline: "Restaurant Semi-Gastronomique".to_string(),
        location: "Port de Saint Martin de Ré".to_string(),
        description: "Découvrez Les Embruns, une expérience culinaire raffinée au cœur du port de \
                      Saint Martin de Ré. Notre cuisine semi-gastronomique met à l'honneur les \
                      produits de la mer et les saveurs locales dans un cadre élégant proche de la mer."
            .to_string(),
        hero: HeroSection {
            title: "Les Embruns".to_string(),
            subtitle: "L'Art Culinaire proche de la mer".to_string(),
            description: "Une expérience semi-gastronomique unique au port de Saint Martin de Ré"
                .to_string(),
            image: "https://images.unsplash.com/photo-1678798947526-49a0c432105c?crop=entropy&cs=srgb&fm=jpg&q=85"
                .to_string(),
        },
        about: AboutSection {
            title: "Notre Histoire".to_string(),
            description: "Niché au cœur du port de Saint Martin de Ré, Les Embruns vous invite à \
                          découvrir une cuisine raffinée où se mêlent tradition française et \
                          innovations culinaires. Notre chef perpétue l'art de sublimer les produits \
                          locaux de l'île de Ré dans un cadre exceptionnel proche de la mer."
                .to_string(),
            image: "https://images.unsplash.com/photo-1728891715962-ffee8c61e38e?crop=entropy&cs=srgb&fm=jpg&q=85"
                .to_string(),
        },
        contact: ContactInfo {
            phone: "05 46 66 46 31".to_string(),
            address: "6 Rue Chay Morin, 17410 Saint-Martin-de-Ré".to_string(),
            hours: OpeningHours {
                monday: "Fermé".to_string(),
                tuesday: SERVICE_HOURS.to_string(),
                wednesday: SERVICE_HOURS.to_string(),
                thursday: SERVICE_HOURS.to_string(),
                friday: SERVICE_HOURS.to_string(),
                saturday: SERVICE_HOURS.to_string(),
                sunday: SERVICE_HOURS.to_string(),
            },
        },
    }
}

pub fn menu() -> Vec<MenuCategory> {
    vec![
        MenuCategory {
            id: "entrees".to_string(),
            name: "Entrées".to_string(),
            order: 1,
            items: vec![
                item(
                    "Huîtres de Marennes-Oléron",
                    "Servies nature ou gratinées au beurre d'algues",
                    "18€",
                ),
                item(
                    "Tartare de Bar de Ligne",
                    "Avocat, pomme verte et vinaigrette aux agrumes",
                    "22€",
                ),
                item(
                    "Velouté de Châtaigne",
                    "Émulsion de truffe et lard paysan",
                    "16€",
                ),
            ],
        },
        MenuCategory {
            id: "plats".to_string(),
            name: "Plats".to_string(),
            order: 2,
            items: vec![
                item(
                    "Sole de Nos Côtes",
                    "Meunière aux pommes de terre de Noirmoutier",
                    "42€",
                ),
                item(
                    "Agneau de Pré-Salé",
                    "Jus au thym, légumes de saison",
                    "38€",
                ),
                item(
                    "Risotto aux Fruits de Mer",
                    "Langoustines, moules et palourdes",
                    "34€",
                ),
            ],
        },
        MenuCategory {
            id: "desserts".to_string(),
            name: "Desserts".to_string(),
            order: 3,
            items: vec![
                item(
                    "Tarte au Chocolat Valrhona",
                    "Glace vanille de Madagascar",
                    "14€",
                ),
                item(
                    "Île Flottante Revisitée",
                    "Caramel au beurre salé de Guérande",
                    "12€",
                ),
            ],
        },
    ]
}

pub fn gallery() -> Vec<GalleryItem> {
    let entry = |id: &str, image: &str, alt: &str, category: &str, order: i32| GalleryItem {
        id: id.to_string(),
        image: format!("https://images.unsplash.com/{image}?crop=entropy&cs=srgb&fm=jpg&q=85"),
        alt: alt.to_string(),
        category: Some(category.to_string()),
        order,
    };

    vec![
        entry(
            "1",
            "photo-1731156683189-64b572795e4e",
            "Plat gastronomique signature",
            "food",
            1,
        ),
        entry(
            "2",
            "photo-1737700088910-8c22735cf11f",
            "Spécialités artisanales",
            "food",
            2,
        ),
        entry(
            "3",
            "photo-1651607826886-efd567ad54f2",
            "Table dressée avec élégance",
            "interior",
            3,
        ),
        entry(
            "4",
            "photo-1709940683584-a3f589a47e18",
            "Vue sur le port",
            "view",
            4,
        ),
    ]
}
