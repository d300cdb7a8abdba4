use super::*;

/// Tests sign-in stores every claim and clear removes them.
///
/// Expected: claims readable after sign-in, all None after clear
#[tokio::test]
async fn stores_and_clears_claims() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();
    let auth_session = AuthSession::new(session);

    auth_session.sign_in(7, Role::Owner, Some(3)).await?;

    assert_eq!(auth_session.get_user_id().await?, Some(7));
    assert_eq!(auth_session.get_role().await?, Some(Role::Owner));
    assert_eq!(auth_session.get_selected_gym_id().await?, Some(3));

    auth_session.clear().await?;

    assert_eq!(auth_session.get_user_id().await?, None);
    assert_eq!(auth_session.get_role().await?, None);
    assert_eq!(auth_session.get_selected_gym_id().await?, None);

    Ok(())
}

/// Tests the selected gym can be changed and cleared.
///
/// Expected: the latest value wins, None removes the claim
#[tokio::test]
async fn updates_selected_gym() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();
    let auth_session = AuthSession::new(session);

    auth_session.sign_in(1, Role::Owner, None).await?;
    assert_eq!(auth_session.get_selected_gym_id().await?, None);

    auth_session.set_selected_gym_id(Some(9)).await?;
    assert_eq!(auth_session.get_selected_gym_id().await?, Some(9));

    auth_session.set_selected_gym_id(None).await?;
    assert_eq!(auth_session.get_selected_gym_id().await?, None);

    Ok(())
}
