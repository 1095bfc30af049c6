//! Demo datasets the dashboard screens start with

use crate::entities::category::{Category, SubCategory};
use crate::entities::color::Color;
use crate::entities::faq::Faq;
use crate::entities::order::{Order, OrderStatus};
use crate::entities::product::Product;
use crate::entities::subscription::Package;
use chrono::{DateTime, NaiveDate, Utc};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

fn image(id: u32) -> String {
    format!("https://picsum.photos/id/{}/800/800", id)
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: u64,
    name: &str,
    category: &str,
    sub_category: &str,
    description: &str,
    price: f64,
    quantity: i64,
    quality: &str,
    images: &[u32],
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> Product {
    let mut product = Product::new(
        name.to_string(),
        category.to_string(),
        sub_category.to_string(),
        description.to_string(),
        price,
        quantity,
        quality.to_string(),
        created_at,
        updated_at,
    )
    .with_id(id);
    product.images = images.iter().copied().map(image).collect();
    product
}

/// The thirteen products of the product management screen, in screen order
pub fn products() -> Vec<Product> {
    let dining_set = |id| {
        product(
            id,
            "Dining Table Set",
            "Furniture",
            "Dining Room",
            "6-seater dining table set with chairs",
            15500.0,
            4,
            "Premium",
            &[42],
            at(2023, 12, 1, 11, 50),
            at(2023, 12, 1, 11, 50),
        )
    };
    let bookshelf = |id| {
        product(
            id,
            "Bookshelf",
            "Furniture",
            "Storage",
            "Wooden bookshelf with 5 shelves",
            4800.0,
            10,
            "Economy",
            &[68],
            at(2024, 3, 20, 12, 15),
            at(2024, 3, 20, 12, 15),
        )
    };

    vec![
        product(
            1,
            "Smartphone X Pro",
            "Electronics",
            "Mobile Phones",
            "High-end smartphone with advanced camera features",
            45000.0,
            25,
            "Premium",
            &[1, 20, 1, 20],
            at(2023, 6, 15, 8, 30),
            at(2023, 12, 10, 14, 45),
        ),
        product(
            2,
            "Leather Jacket",
            "Clothing",
            "Outerwear",
            "Genuine leather jacket for men",
            7500.0,
            12,
            "Premium",
            &[7],
            at(2023, 7, 20, 10, 15),
            at(2023, 7, 20, 10, 15),
        ),
        product(
            3,
            "Coffee Table",
            "Furniture",
            "Living Room",
            "Modern coffee table with glass top",
            3200.0,
            8,
            "Standard",
            &[30],
            at(2023, 8, 5, 15, 20),
            at(2023, 11, 12, 9, 30),
        ),
        product(
            4,
            "Gaming Laptop",
            "Electronics",
            "Laptops",
            "High-performance gaming laptop with RGB keyboard",
            82000.0,
            5,
            "Premium",
            &[60],
            at(2023, 9, 18, 13, 40),
            at(2023, 9, 18, 13, 40),
        ),
        product(
            5,
            "Wireless Earbuds",
            "Electronics",
            "Audio",
            "True wireless earbuds with noise cancellation",
            3800.0,
            30,
            "Standard",
            &[9],
            at(2023, 10, 22, 17, 10),
            at(2023, 10, 22, 17, 10),
        ),
        product(
            6,
            "Cotton T-shirt",
            "Clothing",
            "Casual Wear",
            "Comfortable cotton t-shirt for daily wear",
            650.0,
            100,
            "Standard",
            &[11],
            at(2023, 11, 5, 9, 25),
            at(2023, 11, 5, 9, 25),
        ),
        dining_set(7),
        dining_set(13),
        dining_set(12),
        product(
            8,
            "Smart Watch",
            "Electronics",
            "Wearables",
            "Fitness tracking smartwatch with heart rate monitor",
            5200.0,
            15,
            "Standard",
            &[26],
            at(2024, 1, 10, 14, 20),
            at(2024, 1, 10, 14, 20),
        ),
        product(
            9,
            "Denim Jeans",
            "Clothing",
            "Bottoms",
            "Classic denim jeans for men",
            1800.0,
            35,
            "Standard",
            &[91],
            at(2024, 2, 15, 16, 35),
            at(2024, 2, 15, 16, 35),
        ),
        bookshelf(10),
        bookshelf(11),
    ]
}

/// Categories offered by the product form
pub fn categories() -> Vec<Category> {
    [
        (1, "Electronics", "Electronic devices"),
        (2, "Clothing", "Fashion items"),
        (3, "Furniture", "Home and office furniture"),
        (4, "Books", "Reading materials"),
        (5, "Home Appliances", "Appliances for everyday chores"),
    ]
    .into_iter()
    .map(|(id, name, description)| {
        Category::new(name.to_string(), description.to_string()).with_id(id)
    })
    .collect()
}

pub fn sub_categories() -> Vec<SubCategory> {
    [
        "Mobile Phones:Electronics",
        "Laptops:Electronics",
        "Audio:Electronics",
        "Wearables:Electronics",
        "Casual Wear:Clothing",
        "Outerwear:Clothing",
        "Bottoms:Clothing",
        "Footwear:Clothing",
        "Living Room:Furniture",
        "Bedroom:Furniture",
        "Dining Room:Furniture",
        "Storage:Furniture",
        "Fiction:Books",
        "Non-fiction:Books",
        "Kitchen:Home Appliances",
        "Cleaning:Home Appliances",
    ]
    .into_iter()
    .zip(1u64..)
    .filter_map(|(pair, id)| {
        let (name, parent) = pair.split_once(':')?;
        Some(SubCategory::new(name.to_string(), parent.to_string()).with_id(id))
    })
    .collect()
}

pub fn colors() -> Vec<Color> {
    [
        ("Primary Blue", "#1890ff", true),
        ("Success Green", "#52c41a", true),
        ("Warning Yellow", "#faad14", true),
        ("Error Red", "#f5222d", true),
        ("Gray", "#d9d9d9", false),
    ]
    .into_iter()
    .zip(1u64..)
    .map(|((name, code, active), id)| {
        let mut color = Color::named(name, code).with_id(id);
        color.is_active = active;
        color
    })
    .collect()
}

pub fn faqs() -> Vec<Faq> {
    [
        (
            "What is React?",
            "React is a JavaScript library for building user interfaces.",
        ),
        (
            "What is a component?",
            "A component is a building block of React applications.",
        ),
        (
            "What is JSX?",
            "JSX is a syntax extension for JavaScript that looks similar to HTML.",
        ),
    ]
    .into_iter()
    .zip(1u64..)
    .map(|((question, answer), id)| Faq::new(question.to_string(), answer.to_string()).with_id(id))
    .collect()
}

pub fn packages() -> Vec<Package> {
    vec![
        Package::new(
            "Basic Plan".to_string(),
            "Perfect for startups and small businesses looking to establish their online presence."
                .to_string(),
            29.99,
            "1 month".to_string(),
            false,
        )
        .with_id(1)
        .with_features([
            "5 User Accounts",
            "Basic Analytics",
            "24/7 Support",
            "10GB Storage",
            "Email Integration",
        ]),
        Package::new(
            "Professional Plan".to_string(),
            "Ideal for growing businesses with advanced features and expanded capabilities."
                .to_string(),
            89.99,
            "6 months".to_string(),
            true,
        )
        .with_id(2)
        .with_features([
            "25 User Accounts",
            "Advanced Analytics",
            "24/7 Priority Support",
            "50GB Storage",
            "Email & CRM Integration",
            "API Access",
        ]),
        Package::new(
            "Enterprise Plan".to_string(),
            "Comprehensive solution for large organizations with extensive needs and premium support."
                .to_string(),
            199.99,
            "1 year".to_string(),
            false,
        )
        .with_id(3)
        .with_features([
            "Unlimited User Accounts",
            "Enterprise Analytics",
            "Dedicated Account Manager",
            "Unlimited Storage",
            "Complete System Integration",
            "Custom API Development",
        ]),
    ]
}

pub fn orders() -> Vec<Order> {
    [
        ("#123456", "Alice Johnson", 2500.0, OrderStatus::Pending),
        ("#123457", "Alice Johnson", 2500.0, OrderStatus::Pending),
        ("#123458", "Alice Johnson", 2500.0, OrderStatus::Completed),
        ("#123459", "Alice Jowel", 2500.0, OrderStatus::Completed),
        ("#123460", "John Doe", 3200.0, OrderStatus::Pending),
    ]
    .into_iter()
    .zip(1u64..)
    .map(|((order_id, retailer, amount, status), id)| {
        Order::new(
            order_id.to_string(),
            retailer.to_string(),
            "Alice Johnson".to_string(),
            amount,
            status,
        )
        .with_id(id)
    })
    .collect()
}
