use recipe_import::import_recipe;

const FALLBACK_PAGE: &str = r#"
<!DOCTYPE html>
<html>
<head>
    <meta name="description" content="A cozy one-pot pasta dinner">
    <meta property="og:image" content="https://example.com/pasta.jpg">
</head>
<body>
    <h1>One-Pot Pasta</h1>
    <ul class="ingredients-list">
        <li>8 oz spaghetti</li>
        <li>2 cloves garlic</li>
    </ul>
    <div class="instructions">
        <p>Short</p>
        <p>Boil the pasta in salted water until al dente.</p>
        <p>Toss with garlic and olive oil before serving.</p>
    </div>
</body>
</html>
"#;

#[tokio::test]
async fn test_fallback_when_no_structured_data() {
    let mut server = mockito::Server::new_async().await;

    let _m = server
        .mock("GET", "/recipe")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(FALLBACK_PAGE)
        .create_async()
        .await;

    let url = format!("{}/recipe", server.url());
    let recipe = import_recipe(&url).await.unwrap();

    assert_eq!(recipe.title, "One-Pot Pasta");
    assert_eq!(recipe.description, "A cozy one-pot pasta dinner");
    assert_eq!(recipe.image_url.as_deref(), Some("https://example.com/pasta.jpg"));

    // unknowable from markup alone
    assert_eq!(recipe.servings, 2);
    assert_eq!(recipe.prep_time, None);
    assert_eq!(recipe.cook_time, None);

    let names: Vec<&str> = recipe.ingredients.iter().map(|i| i.name.as_str()).collect();
    assert!(names.contains(&"spaghetti"));
    assert!(names.contains(&"garlic"));

    // the 10-character noise filter drops the label-only node
    assert_eq!(
        recipe.directions,
        vec![
            "Boil the pasta in salted water until al dente.",
            "Toss with garlic and olive oil before serving."
        ]
    );

    // no time bucket without timing data; title still drives style tags
    assert_eq!(recipe.tags, vec!["Pasta"]);
}

#[tokio::test]
async fn test_fallback_defaults_on_bare_page() {
    let mut server = mockito::Server::new_async().await;

    let _m = server
        .mock("GET", "/recipe")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<html><body><p>nothing recipe-shaped here</p></body></html>")
        .create_async()
        .await;

    let url = format!("{}/recipe", server.url());
    let recipe = import_recipe(&url).await.unwrap();

    assert_eq!(recipe.title, "Imported Recipe");
    assert_eq!(recipe.description, "");
    assert_eq!(recipe.image_url, None);
    assert_eq!(recipe.servings, 2);
    assert!(recipe.ingredients.is_empty());
    assert!(recipe.directions.is_empty());
    assert!(recipe.tags.is_empty());
}
