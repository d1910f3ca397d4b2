use crate::api::responses::SearchRequest;
use crate::api::{handlers, rejection};
use crate::models::{CreateQuestionRequest, QuizRequest};
use crate::services::TriviaService;
use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;
use warp::{Filter, Reply};

/// 请求体大小上限
const MAX_BODY_BYTES: u64 = 16 * 1024;

fn with_service(
    service: Arc<TriviaService>,
) -> impl Filter<Extract = (Arc<TriviaService>,), Error = Infallible> + Clone {
    warp::any().map(move || service.clone())
}

fn json_body<T>() -> impl Filter<Extract = (T,), Error = warp::Rejection> + Clone
where
    T: serde::de::DeserializeOwned + Send,
{
    warp::body::content_length_limit(MAX_BODY_BYTES).and(warp::body::json())
}

/// 组装全部路由
///
/// 路径在前、方法在后，这样路径存在但方法不对时得到 405，路径不存在时得到 404。
/// 错误响应先生成再经过 CORS，浏览器才能读到错误体
pub fn routes(
    service: Arc<TriviaService>,
    legacy_missing_field_status: bool,
) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let get_categories = warp::path!("categories")
        .and(warp::get())
        .and(with_service(service.clone()))
        .and_then(handlers::get_categories);

    let get_category_questions = warp::path!("categories" / i64 / "questions")
        .and(warp::get())
        .and(with_service(service.clone()))
        .and_then(handlers::get_category_questions);

    let get_questions = warp::path!("questions")
        .and(warp::get())
        .and(warp::query::<HashMap<String, String>>())
        .and(with_service(service.clone()))
        .and_then(handlers::get_questions);

    let create_question = warp::path!("questions")
        .and(warp::post())
        .and(with_service(service.clone()))
        .and(json_body::<CreateQuestionRequest>())
        .and_then(handlers::create_question);

    let delete_question = warp::path!("questions" / i64)
        .and(warp::delete())
        .and(with_service(service.clone()))
        .and_then(handlers::delete_question);

    let search_questions = warp::path!("questions" / "search")
        .and(warp::post())
        .and(warp::query::<HashMap<String, String>>())
        .and(with_service(service.clone()))
        .and(json_body::<SearchRequest>())
        .and_then(handlers::search_questions);

    let play_quiz = warp::path!("quizzes")
        .and(warp::post())
        .and(with_service(service))
        .and(json_body::<QuizRequest>())
        .and_then(handlers::play_quiz);

    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["Content-Type", "Authorization"])
        .allow_methods(vec!["GET", "PATCH", "POST", "DELETE", "OPTIONS"]);

    get_categories
        .or(get_category_questions)
        .or(get_questions)
        .or(create_question)
        .or(delete_question)
        .or(search_questions)
        .or(play_quiz)
        .recover(move |r| rejection::return_error(r, legacy_missing_field_status))
        .with(cors)
        // 只剩下 CORS 预检被拒的情况
        .recover(move |r| rejection::return_error(r, legacy_missing_field_status))
        .with(warp::trace::request())
}
