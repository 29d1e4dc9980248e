pub mod controller;
pub mod dialog;
pub mod dto;
pub mod form;
pub mod model;
pub mod notification;
pub mod service;
