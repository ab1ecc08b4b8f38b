mod observability;
mod storage;
