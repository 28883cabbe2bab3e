//! Demo records loaded into the catalog at startup.

use chrono::NaiveDateTime;

use retail_ops_core::{
    AccountStatus, AlertUrgency, CartCode, CartStatus, CustomerCode, Email,
    PaymentType, Price, ProductCode, ProductMomentum, Sku, StaffRole, StaffUserId,
    SupportChannel, TicketCode, TicketPriority, TicketStatus, TransactionCode, TransactionStatus,
};

use super::CatalogError;
use crate::components::badge::Tone;
use crate::models::{
    Activity, ActivityKind, CustomerSegment, DietaryTrend, DigitalCart, InventoryItem, LiveMetric,
    LowStockAlert, NutritionFacts, NutritionHighlight, OverviewStat, ProductPerformance,
    QuickLink, StaffAccount, SupportTicket, TIMESTAMP_FORMAT, Transaction, Trend,
};

/// Departments in today's revenue order.
pub const CATEGORY_RANKING: &[&str] = &["Produce", "Dairy", "Meat", "Bakery", "Beverages"];

fn timestamp(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
}

#[allow(clippy::too_many_arguments)]
fn inventory_item(
    id: &str,
    name: &str,
    category: &str,
    cents: i64,
    stock: u32,
    min_stock: u32,
    barcode: &str,
    nutrition: (u32, &str, &str, &str),
) -> InventoryItem {
    let (calories, protein, carbs, fat) = nutrition;
    InventoryItem {
        id: Sku::new(id),
        name: name.to_string(),
        category: category.to_string(),
        price: Price::usd_cents(cents),
        stock,
        min_stock,
        barcode: barcode.to_string(),
        nutrition: NutritionFacts {
            calories,
            protein: protein.to_string(),
            carbs: carbs.to_string(),
            fat: fat.to_string(),
        },
    }
}

pub(super) fn inventory() -> Vec<InventoryItem> {
    vec![
        inventory_item(
            "WM001",
            "Organic Bananas",
            "Produce",
            299,
            12,
            20,
            "123456789012",
            (105, "1.3g", "27g", "0.4g"),
        ),
        inventory_item(
            "WM002",
            "Whole Milk - 1 Gallon",
            "Dairy",
            429,
            48,
            25,
            "123456789013",
            (150, "8g", "12g", "8g"),
        ),
        inventory_item(
            "WM003",
            "Whole Wheat Bread",
            "Bakery",
            349,
            0,
            15,
            "123456789014",
            (80, "4g", "14g", "1g"),
        ),
        inventory_item(
            "WM004",
            "Greek Yogurt - Plain",
            "Dairy",
            599,
            67,
            30,
            "123456789015",
            (100, "17g", "6g", "0g"),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn cart(
    id: &str,
    customer: &str,
    location: &str,
    items: u32,
    cents: i64,
    duration: &str,
    status: CartStatus,
    needs_assistance: bool,
    last_activity: &str,
) -> DigitalCart {
    DigitalCart {
        id: CartCode::new(id),
        customer: customer.to_string(),
        location: location.to_string(),
        items,
        total: Price::usd_cents(cents),
        duration: duration.to_string(),
        status,
        needs_assistance,
        last_activity: last_activity.to_string(),
    }
}

pub(super) fn carts() -> Vec<DigitalCart> {
    vec![
        cart(
            "CART-247",
            "Sarah Johnson",
            "Aisle 7 - Produce",
            8,
            4723,
            "12m 34s",
            CartStatus::Active,
            false,
            "2 min ago",
        ),
        cart(
            "CART-248",
            "Mike Chen",
            "Aisle 3 - Dairy",
            3,
            1897,
            "5m 12s",
            CartStatus::Active,
            true,
            "30s ago",
        ),
        cart(
            "CART-249",
            "Emma Davis",
            "Self-Checkout",
            15,
            8945,
            "23m 45s",
            CartStatus::CheckingOut,
            false,
            "1 min ago",
        ),
        cart(
            "CART-250",
            "James Wilson",
            "Aisle 12 - Electronics",
            2,
            12499,
            "8m 22s",
            CartStatus::Active,
            false,
            "4 min ago",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn ticket(
    id: &str,
    customer: &str,
    kind: &str,
    priority: TicketPriority,
    status: TicketStatus,
    subject: &str,
    created: &str,
    last_response: &str,
    channel: SupportChannel,
) -> SupportTicket {
    SupportTicket {
        id: TicketCode::new(id),
        customer: customer.to_string(),
        kind: kind.to_string(),
        priority,
        status,
        subject: subject.to_string(),
        created: created.to_string(),
        last_response: last_response.to_string(),
        channel,
    }
}

pub(super) fn tickets() -> Vec<SupportTicket> {
    vec![
        ticket(
            "SUP-001",
            "Sarah Johnson",
            "Product Inquiry",
            TicketPriority::Medium,
            TicketStatus::Open,
            "Nutritional information for organic bananas",
            "2 hours ago",
            "45 min ago",
            SupportChannel::Chat,
        ),
        ticket(
            "SUP-002",
            "Mike Chen",
            "Cart Issue",
            TicketPriority::High,
            TicketStatus::InProgress,
            "Digital cart not syncing items",
            "30 min ago",
            "5 min ago",
            SupportChannel::Phone,
        ),
        ticket(
            "SUP-003",
            "Emma Davis",
            "Payment",
            TicketPriority::Urgent,
            TicketStatus::Escalated,
            "Transaction failed but amount deducted",
            "15 min ago",
            "2 min ago",
            SupportChannel::Video,
        ),
        ticket(
            "SUP-004",
            "James Wilson",
            "General",
            TicketPriority::Low,
            TicketStatus::Resolved,
            "Store hours inquiry",
            "1 day ago",
            "6 hours ago",
            SupportChannel::Chat,
        ),
    ]
}

pub(super) fn transactions() -> Result<Vec<Transaction>, chrono::ParseError> {
    let rows = [
        ("TXN001", "CUST001", 8947, PaymentType::DigitalWallet, TransactionStatus::Completed, "2024-01-15 14:23", 5),
        ("TXN002", "CUST002", 15678, PaymentType::PreOrder, TransactionStatus::Pending, "2024-01-15 14:15", 8),
        ("TXN003", "CUST003", 2399, PaymentType::QueuelessPickup, TransactionStatus::Completed, "2024-01-15 14:10", 2),
        ("TXN004", "CUST004", 31245, PaymentType::DigitalCart, TransactionStatus::Processing, "2024-01-15 14:05", 12),
        ("TXN005", "CUST005", 6723, PaymentType::DigitalWallet, TransactionStatus::Failed, "2024-01-15 13:58", 4),
    ];

    rows.into_iter()
        .map(|(id, customer, cents, payment_type, status, at, items)| -> Result<_, chrono::ParseError> {
            Ok(Transaction {
                id: TransactionCode::new(id),
                customer_id: CustomerCode::new(customer),
                amount: Price::usd_cents(cents),
                payment_type,
                status,
                timestamp: timestamp(at)?,
                items,
            })
        })
        .collect()
}

pub(super) fn staff() -> Result<Vec<StaffAccount>, CatalogError> {
    let rows = [
        (1, "John Manager", "john.manager@walmart.com", StaffRole::Manager, AccountStatus::Active, "2024-01-15 09:30"),
        (2, "Sarah Staff", "sarah.staff@walmart.com", StaffRole::Staff, AccountStatus::Active, "2024-01-15 08:45"),
        (3, "Mike Admin", "mike.admin@walmart.com", StaffRole::Admin, AccountStatus::Active, "2024-01-14 17:22"),
        (4, "Lisa Cashier", "lisa.cashier@walmart.com", StaffRole::Staff, AccountStatus::Inactive, "2024-01-10 14:15"),
    ];

    rows.into_iter()
        .map(|(id, name, email, role, status, last_login)| -> Result<_, CatalogError> {
            Ok(StaffAccount {
                id: StaffUserId::new(id),
                name: name.to_string(),
                email: Email::parse(email)?,
                role,
                status,
                last_login: timestamp(last_login)?,
            })
        })
        .collect()
}

pub(super) fn alerts() -> Vec<LowStockAlert> {
    [
        ("P001", "Organic Bananas", 12, 50, "Produce", "Fresh Farms", AlertUrgency::Critical),
        ("P002", "Greek Yogurt", 23, 40, "Dairy", "Dairy Co", AlertUrgency::High),
        ("P003", "Whole Wheat Bread", 8, 25, "Bakery", "Baker's Best", AlertUrgency::Critical),
        ("P004", "Chicken Breast", 15, 30, "Meat", "Meat Masters", AlertUrgency::Medium),
        ("P005", "Energy Drinks", 18, 45, "Beverages", "Drink Inc", AlertUrgency::High),
    ]
    .into_iter()
    .map(
        |(id, name, current_stock, min_stock, category, supplier, urgency)| LowStockAlert {
            id: ProductCode::new(id),
            name: name.to_string(),
            current_stock,
            min_stock,
            category: category.to_string(),
            supplier: supplier.to_string(),
            urgency,
        },
    )
    .collect()
}

pub(super) fn products() -> Vec<ProductPerformance> {
    [
        ("P001", "Organic Bananas", "Produce", 1247, 187_195, "+12%", ProductMomentum::Hot),
        ("P002", "Great Value Milk", "Dairy", 892, 267_689, "+8%", ProductMomentum::Trending),
        ("P003", "Chicken Breast", "Meat", 634, 476_123, "-3%", ProductMomentum::Stable),
        ("P004", "Whole Wheat Bread", "Bakery", 456, 136_867, "+15%", ProductMomentum::Rising),
        ("P005", "Greek Yogurt", "Dairy", 389, 194_589, "+22%", ProductMomentum::Hot),
    ]
    .into_iter()
    .map(
        |(id, name, category, sales, cents, trend, momentum)| ProductPerformance {
            id: ProductCode::new(id),
            name: name.to_string(),
            category: category.to_string(),
            sales,
            revenue: Price::usd_cents(cents),
            trend: Trend::new(trend),
            momentum,
        },
    )
    .collect()
}

pub(super) fn live_metrics() -> Vec<LiveMetric> {
    [
        ("Current Shoppers", "342", "+23"),
        ("Items Scanned/min", "127", "+5"),
        ("Checkout Rate", "89%", "+2%"),
        ("Cart Abandonment", "12%", "-4%"),
    ]
    .into_iter()
    .map(|(metric, value, change)| LiveMetric {
        metric: metric.to_string(),
        value: value.to_string(),
        change: Trend::new(change),
    })
    .collect()
}

pub(super) fn nutrition_highlights() -> Vec<NutritionHighlight> {
    [
        ("Greek Yogurt - Plain", "Dairy", 1247, "+23%", "High Protein"),
        ("Organic Spinach", "Produce", 892, "+18%", "High Iron"),
        ("Quinoa", "Grains", 534, "+45%", "Complete Protein"),
        ("Salmon Fillets", "Seafood", 423, "-5%", "Omega-3"),
    ]
    .into_iter()
    .map(|(name, category, sales, growth, nutrition)| NutritionHighlight {
        name: name.to_string(),
        category: category.to_string(),
        sales,
        growth: Trend::new(growth),
        nutrition: nutrition.to_string(),
    })
    .collect()
}

pub(super) fn dietary_trends() -> Vec<DietaryTrend> {
    [
        ("Plant-Based", 32, "+8%", Tone::Success),
        ("Keto", 18, "+3%", Tone::Warning),
        ("Mediterranean", 25, "+12%", Tone::Primary),
        ("Gluten-Free", 15, "-2%", Tone::Secondary),
    ]
    .into_iter()
    .map(|(diet, percentage, change, tone)| DietaryTrend {
        diet: diet.to_string(),
        percentage,
        change: Trend::new(change),
        tone,
    })
    .collect()
}

pub(super) fn segments() -> Vec<CustomerSegment> {
    [
        ("Health-Conscious Families", "2,847", "$89.23", "Organic Produce", "+15%"),
        ("Fitness Enthusiasts", "1,523", "$67.45", "Protein Products", "+28%"),
        ("Senior Nutrition", "934", "$45.67", "Heart-Healthy", "+7%"),
    ]
    .into_iter()
    .map(
        |(segment, size, avg_spend, top_category, growth)| CustomerSegment {
            segment: segment.to_string(),
            size: size.to_string(),
            avg_spend: avg_spend.to_string(),
            top_category: top_category.to_string(),
            growth: Trend::new(growth),
        },
    )
    .collect()
}

pub(super) fn overview() -> Vec<OverviewStat> {
    [
        ("Active Digital Carts", "24", "+12%", Tone::Live, "ph-shopping-cart"),
        ("Low Stock Items", "12", "-5%", Tone::Warning, "ph-warning"),
        ("Today's Revenue", "$45,321", "+18%", Tone::Success, "ph-currency-dollar"),
        ("Support Tickets", "8", "-23%", Tone::Info, "ph-users"),
    ]
    .into_iter()
    .map(|(title, value, change, tone, icon)| OverviewStat {
        title: title.to_string(),
        value: value.to_string(),
        change: Trend::new(change),
        tone,
        icon,
    })
    .collect()
}

pub(super) fn activities() -> Vec<Activity> {
    [
        (
            ActivityKind::Inventory,
            "Low stock alert: Organic Bananas (12 units remaining)",
            "2 minutes ago",
            Tone::Warning,
        ),
        (
            ActivityKind::Cart,
            "Customer assistance requested at Cart #247",
            "5 minutes ago",
            Tone::Info,
        ),
        (
            ActivityKind::Transaction,
            "Digital wallet payment processed: $67.89",
            "8 minutes ago",
            Tone::Success,
        ),
        (
            ActivityKind::Recommendation,
            "ML model updated with new dietary preferences",
            "15 minutes ago",
            Tone::Info,
        ),
    ]
    .into_iter()
    .map(|(kind, message, time, tone)| Activity {
        kind,
        message: message.to_string(),
        time: time.to_string(),
        tone,
    })
    .collect()
}

pub(super) fn quick_links() -> Vec<QuickLink> {
    [
        ("/inventory", "Add New Product", "ph-package"),
        ("/carts", "Monitor Carts", "ph-eye"),
        ("/insights", "View Analytics", "ph-trend-up"),
        ("/support", "Customer Support", "ph-users"),
    ]
    .into_iter()
    .map(|(href, label, icon)| QuickLink {
        href: href.to_string(),
        label: label.to_string(),
        icon,
    })
    .collect()
}
