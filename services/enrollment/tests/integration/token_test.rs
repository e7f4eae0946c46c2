use campus_enrollment::error::EnrollmentError;
use campus_enrollment::usecase::token::{
    LoginInput, LoginUseCase, RefreshTokenUseCase, validate_token,
};

use crate::helpers::{MockAccountRepo, PlainHasher, test_account};

#[tokio::test]
async fn should_issue_token_pair_on_login() {
    let account = test_account();
    let uc = LoginUseCase {
        accounts: MockAccountRepo::new(vec![account.clone()]),
        hasher: PlainHasher,
        jwt_secret: "secret".to_owned(),
    };
    let output = uc
        .execute(LoginInput {
            email: account.email.clone(),
            password: "hunter2".to_owned(),
        })
        .await
        .unwrap();

    let claims = validate_token(&output.access_token, "secret").unwrap();
    assert_eq!(claims.sub, account.id.to_string());
    assert_eq!(claims.exp, output.access_token_exp);
    validate_token(&output.refresh_token, "secret").unwrap();
}

#[tokio::test]
async fn should_reject_wrong_password() {
    let account = test_account();
    let uc = LoginUseCase {
        accounts: MockAccountRepo::new(vec![account.clone()]),
        hasher: PlainHasher,
        jwt_secret: "secret".to_owned(),
    };
    let result = uc
        .execute(LoginInput {
            email: account.email,
            password: "wrong".to_owned(),
        })
        .await;
    assert!(matches!(result, Err(EnrollmentError::InvalidCredentials)));
}

#[tokio::test]
async fn should_reject_unknown_email() {
    let uc = LoginUseCase {
        accounts: MockAccountRepo::empty(),
        hasher: PlainHasher,
        jwt_secret: "secret".to_owned(),
    };
    let result = uc
        .execute(LoginInput {
            email: "nobody@example.com".to_owned(),
            password: "hunter2".to_owned(),
        })
        .await;
    assert!(matches!(result, Err(EnrollmentError::AccountNotFound)));
}

#[tokio::test]
async fn should_reissue_pair_from_refresh_token() {
    let account = test_account();
    let login = LoginUseCase {
        accounts: MockAccountRepo::new(vec![account.clone()]),
        hasher: PlainHasher,
        jwt_secret: "secret".to_owned(),
    };
    let issued = login
        .execute(LoginInput {
            email: account.email.clone(),
            password: "hunter2".to_owned(),
        })
        .await
        .unwrap();

    let refresh = RefreshTokenUseCase {
        accounts: MockAccountRepo::new(vec![account.clone()]),
        jwt_secret: "secret".to_owned(),
    };
    let output = refresh.execute(&issued.refresh_token).await.unwrap();
    assert_eq!(output.account_id, account.id);
    validate_token(&output.access_token, "secret").unwrap();
}

#[tokio::test]
async fn should_reject_garbage_refresh_token() {
    let refresh = RefreshTokenUseCase {
        accounts: MockAccountRepo::empty(),
        jwt_secret: "secret".to_owned(),
    };
    let result = refresh.execute("not-a-jwt").await;
    assert!(matches!(result, Err(EnrollmentError::InvalidRefreshToken)));
}

#[tokio::test]
async fn should_reject_refresh_for_deleted_account() {
    let account = test_account();
    let login = LoginUseCase {
        accounts: MockAccountRepo::new(vec![account.clone()]),
        hasher: PlainHasher,
        jwt_secret: "secret".to_owned(),
    };
    let issued = login
        .execute(LoginInput {
            email: account.email,
            password: "hunter2".to_owned(),
        })
        .await
        .unwrap();

    let refresh = RefreshTokenUseCase {
        accounts: MockAccountRepo::empty(), // account gone
        jwt_secret: "secret".to_owned(),
    };
    let result = refresh.execute(&issued.refresh_token).await;
    assert!(matches!(result, Err(EnrollmentError::InvalidRefreshToken)));
}
