mod base32z;
