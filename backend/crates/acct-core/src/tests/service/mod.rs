mod account_service;
