//! 请求处理函数
//!
//! 只负责 HTTP 与领域操作之间的转换，错误统一交给 `rejection` 处理

use crate::api::responses::*;
use crate::error::AppError;
use crate::models::{CreateQuestionRequest, QuizRequest};
use crate::services::{parse_page, TriviaService};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument};
use warp::{Rejection, Reply};

fn reject(err: AppError) -> Rejection {
    warp::reject::custom(err)
}

fn page_from(params: &HashMap<String, String>) -> Result<usize, Rejection> {
    parse_page(params.get("page").map(String::as_str)).map_err(reject)
}

#[instrument(skip(service))]
pub async fn get_categories(service: Arc<TriviaService>) -> Result<impl Reply, Rejection> {
    let categories = service.list_categories().map_err(reject)?;
    Ok(warp::reply::json(&CategoriesResponse {
        success: true,
        categories,
    }))
}

#[instrument(skip(service))]
pub async fn get_questions(
    params: HashMap<String, String>,
    service: Arc<TriviaService>,
) -> Result<impl Reply, Rejection> {
    let page = page_from(&params)?;
    let listing = service.list_questions(page).map_err(reject)?;
    Ok(warp::reply::json(&QuestionsResponse {
        success: true,
        questions: listing.questions,
        total_questions: listing.total_questions,
        categories: listing.categories,
        current_category: None,
    }))
}

#[instrument(skip(service))]
pub async fn delete_question(id: i64, service: Arc<TriviaService>) -> Result<impl Reply, Rejection> {
    let id = service.delete_question(id).map_err(reject)?;
    Ok(warp::reply::json(&DeleteResponse { success: true, id }))
}

#[instrument(skip(service))]
pub async fn create_question(
    service: Arc<TriviaService>,
    request: CreateQuestionRequest,
) -> Result<impl Reply, Rejection> {
    let question = service.create_question(request).map_err(reject)?;
    Ok(warp::reply::json(&CreateResponse::from(question)))
}

#[instrument(skip(service))]
pub async fn search_questions(
    params: HashMap<String, String>,
    service: Arc<TriviaService>,
    request: SearchRequest,
) -> Result<impl Reply, Rejection> {
    let page = page_from(&params)?;
    let outcome = service
        .search_questions(request.search_term.as_deref(), page)
        .map_err(reject)?;
    Ok(warp::reply::json(&SearchResponse {
        success: true,
        questions: outcome.questions,
        total_questions: outcome.total_questions,
        current_category: outcome.current_category,
    }))
}

#[instrument(skip(service))]
pub async fn get_category_questions(
    category_id: i64,
    service: Arc<TriviaService>,
) -> Result<impl Reply, Rejection> {
    let found = service.questions_by_category(category_id).map_err(reject)?;
    Ok(warp::reply::json(&CategoryQuestionsResponse {
        success: true,
        questions: found.questions,
        total_questions: found.total_questions,
        current_category: found.current_category,
    }))
}

#[instrument(skip(service))]
pub async fn play_quiz(
    service: Arc<TriviaService>,
    request: QuizRequest,
) -> Result<impl Reply, Rejection> {
    let question = service.next_quiz_question(request).map_err(reject)?;
    debug!("抽到题目: {:?}", question.as_ref().map(|q| q.id));
    Ok(warp::reply::json(&QuizResponse {
        success: true,
        question,
    }))
}
