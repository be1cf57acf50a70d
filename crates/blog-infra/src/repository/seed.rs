//! Sample posts for a freshly started server.

use chrono::{DateTime, Duration, Utc};

use blog_core::{BlogPost, BlogPostDraft};

/// Four demo posts with ids 1-4, created a few days before `now`.
pub fn sample_posts(now: DateTime<Utc>) -> Vec<BlogPost> {
    let entries = [
        (
            "Getting Started with Azure Functions",
            "Azure Functions is a serverless compute service that enables you to run code on-demand without having to explicitly provision or manage infrastructure.",
            "John Doe",
            vec!["Azure", "Serverless", "Cloud"],
            5,
        ),
        (
            "Clean Architecture in .NET",
            "Clean Architecture is a software design philosophy that separates the elements of a design into ring levels.",
            "Jane Smith",
            vec![".NET", "Architecture", "Best Practices"],
            2,
        ),
        (
            "Dependency Injection in .NET",
            "Dependency injection is a design pattern that allows the creation of dependent objects outside of a class and provides those objects to a class through different ways.",
            "Bob Johnson",
            vec![".NET", "Design Patterns", "Best Practices"],
            10,
        ),
        (
            "Working with Azure Cosmos DB",
            "Azure Cosmos DB is a fully managed NoSQL database service for modern app development. It offers multi-master replication, guaranteed single-digit millisecond response times, and 99.999-percent availability.",
            "Alice Williams",
            vec!["Azure", "Database", "NoSQL", "Cosmos DB"],
            7,
        ),
    ];

    entries
        .into_iter()
        .zip(1..)
        .map(|((title, content, author, tags, age_days), id)| {
            BlogPost::create(
                id,
                BlogPostDraft::new(title, content, author).with_tags(tags),
                now - Duration::days(age_days),
            )
        })
        .collect()
}
