
use reqwest::StatusCode;
use std::collections::HashMap;

use touchline_types::errors::ApplicationError;

use crate::test_utils::tests::setup_web_app;

#[tokio::test]
async fn test_add_player_through_form() -> Result<(), ApplicationError> {
    let (base_url, client, uow_provider) = setup_web_app().await?;

    let mut form = HashMap::new();
    form.insert("name", "Asha Otieno");
    form.insert("position", "Midfielder");
    form.insert("role", "Captain");
    form.insert("gender", "Female");
    form.insert("jersey_number", "10");
    form.insert("image_url", "");

    let res = client
        .post(format!("{base_url}/team/players"))
        .form(&form)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    let uow = uow_provider.begin().await?;
    let players = uow.players().list().await?;
    let asha = players.iter().find(|p| p.name == "Asha Otieno").unwrap();
    assert_eq!(asha.jersey_number, Some(10));

    let res = client
        .get(format!("{base_url}/team?notice=player_added"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.text().await.unwrap();
    assert!(body.contains("Player added successfully"));
    assert!(body.contains("Asha Otieno"));

    Ok(())
}

#[tokio::test]
async fn test_add_player_with_missing_fields() -> Result<(), ApplicationError> {
    let (base_url, client, _) = setup_web_app().await?;

    let mut form = HashMap::new();
    form.insert("name", "Asha Otieno");

    let res = client
        .post(format!("{base_url}/team/players"))
        .form(&form)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = res.text().await.unwrap();
    assert!(body.contains("Please fill in all required fields"));

    Ok(())
}

#[tokio::test]
async fn test_statistics_adjust_flow() -> Result<(), ApplicationError> {
    let (base_url, client, uow_provider) = setup_web_app().await?;

    let mut form = HashMap::new();
    form.insert("name", "John Smith");
    form.insert("position", "Forward");
    form.insert("gender", "Male");
    client
        .post(format!("{base_url}/team/players"))
        .form(&form)
        .send()
        .await
        .unwrap();

    let uow = uow_provider.begin().await?;
    let player = uow
        .players()
        .list()
        .await?
        .into_iter()
        .find(|p| p.name == "John Smith")
        .unwrap();
    let player_id = player.id.to_string();

    let mut adjust = HashMap::new();
    adjust.insert("player_id", player_id.as_str());
    adjust.insert("season", "2024-25");
    adjust.insert("competition", "league");
    adjust.insert("field", "goals");
    adjust.insert("direction", "increment");

    let res = client
        .post(format!("{base_url}/statistics/adjust"))
        .form(&adjust)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        res.headers().get("location").unwrap(),
        "/statistics?season=2024-25&competition=league"
    );

    adjust.insert("field", "appearances");
    adjust.insert("direction", "decrement");
    let res = client
        .post(format!("{base_url}/statistics/adjust"))
        .form(&adjust)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let res = client
        .get(format!("{base_url}/statistics?season=2024-25&competition=all"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.text().await.unwrap();
    assert!(body.contains("John Smith"));
    assert!(!body.contains("/statistics/adjust"));

    Ok(())
}

#[tokio::test]
async fn test_static_pages() -> Result<(), ApplicationError> {
    let (base_url, client, _) = setup_web_app().await?;

    for (path, text) in [
        ("/", "Explore our team"),
        ("/facilities", "Our Facilities"),
        ("/history", "Club History"),
        ("/fixtures", "Visitors United"),
        ("/results?tab=results", "Royal Athletic"),
        ("/standings", "League Table"),
        ("/gallery?tab=videos", "Goal of the Month"),
    ] {
        let res = client.get(format!("{base_url}{path}")).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::OK, "GET {path}");
        assert!(res.text().await.unwrap().contains(text), "GET {path}");
    }

    Ok(())
}
