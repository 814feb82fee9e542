mod countries_tests;
mod currencies_tests;
mod languages_tests;
mod macro_languages_tests;
mod phones_tests;
